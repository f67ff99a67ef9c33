//! Repository adapters: walk the source tree, resolve exemptions, read source files,
//! and load `Cargo.lock` / `Cargo.toml`.
//!
//! This crate is allowed to do filesystem IO. It never writes to the tree.

#![forbid(unsafe_code)]

mod discover;
mod error;
mod exempt;
mod parse;

use anyhow::Context;
use camino::Utf8Path;
use codecheck_domain::model::{LockfileModel, SourceFile, WorkspaceVersionPair};
use codecheck_types::RepoPath;

pub use discover::{ExclusionSet, SourceFiles, source_files};
pub use error::ManifestError;
pub use exempt::ExemptionSet;

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a `Cargo.lock`. **Never panics** on any input.
    pub fn parse_lockfile(text: &str) -> Result<(), ManifestError> {
        let _ = parse::parse_lockfile(&RepoPath::new("Cargo.lock"), text)?;
        Ok(())
    }

    /// Parse arbitrary text as a root `Cargo.toml`. **Never panics** on any input.
    pub fn parse_root_manifest(text: &str) -> Result<(), ManifestError> {
        let _ = parse::parse_root_manifest(&RepoPath::new("Cargo.toml"), text)?;
        Ok(())
    }
}

/// Read one source file as text.
///
/// Files that are not valid UTF-8 are an error, as are files that vanish mid-run.
pub fn read_source(repo_root: &Utf8Path, path: &RepoPath) -> anyhow::Result<SourceFile> {
    let abs = repo_root.join(path.as_str());
    let text = std::fs::read_to_string(&abs).with_context(|| format!("read {abs}"))?;
    Ok(SourceFile::new(path.clone(), text))
}

pub fn load_lockfile(repo_root: &Utf8Path, path: &RepoPath) -> Result<LockfileModel, ManifestError> {
    let text = read_manifest_text(repo_root, path)?;
    parse::parse_lockfile(path, &text)
}

pub fn load_root_manifest(
    repo_root: &Utf8Path,
    path: &RepoPath,
) -> Result<WorkspaceVersionPair, ManifestError> {
    let text = read_manifest_text(repo_root, path)?;
    parse::parse_root_manifest(path, &text)
}

fn read_manifest_text(repo_root: &Utf8Path, path: &RepoPath) -> Result<String, ManifestError> {
    let abs = repo_root.join(path.as_str());
    std::fs::read_to_string(&abs).map_err(|source| ManifestError::Read { path: abs, source })
}
