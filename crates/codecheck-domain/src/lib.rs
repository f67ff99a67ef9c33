//! Pure policy evaluation (no IO).
//!
//! Input: file contents and parsed manifest models gathered elsewhere.
//! Output: diagnostics and per-check outcomes.

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod policy;
pub mod report;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checks::license_header::LicenseTemplate;
pub use checks::markers::MarkerSet;
pub use report::{CheckOutcome, RunReport, Verdict};
