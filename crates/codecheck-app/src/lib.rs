//! Use case orchestration for codecheck.
//!
//! This crate coordinates the settings, repo and domain layers: it resolves the built-in
//! policy, runs every check in a fixed order and streams the human report.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging and exit status.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{
    CheckDescriptor, CheckInput, CheckKind, plan, run_check, verdict_exit_code,
};
pub use render::{write_group, write_summary};
