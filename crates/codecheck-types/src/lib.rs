//! Stable DTOs and IDs used across the codecheck workspace.
//!
//! This crate is intentionally boring:
//! - stable string IDs for checks and diagnostic codes
//! - the diagnostic shape every check emits
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod diagnostic;
pub mod ids;
pub mod path;

pub use diagnostic::{Diagnostic, Location};
pub use path::RepoPath;
