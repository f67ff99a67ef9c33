use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use codecheck_types::RepoPath;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Files exempted from a check, compared by filesystem identity.
///
/// Entries are canonicalized once, so `./a/b.rs`, `a/../a/b.rs` and a symlink
/// to `a/b.rs` all name the same exempted file. Entries that do not exist are ignored.
#[derive(Clone, Debug)]
pub struct ExemptionSet {
    root: Utf8PathBuf,
    canonical: BTreeSet<PathBuf>,
}

impl ExemptionSet {
    pub fn resolve(root: &Utf8Path, entries: &[RepoPath]) -> Self {
        let mut canonical = BTreeSet::new();
        for entry in entries {
            let abs = root.join(entry.as_str());
            match std::fs::canonicalize(&abs) {
                Ok(path) => {
                    canonical.insert(path);
                }
                Err(err) => {
                    tracing::debug!(path = %entry, error = %err, "exemption does not resolve; ignoring");
                }
            }
        }
        Self {
            root: root.to_path_buf(),
            canonical,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Whether `path` (relative to the root) is the same file as an exempted entry.
    pub fn contains(&self, path: &RepoPath) -> anyhow::Result<bool> {
        if self.canonical.is_empty() {
            return Ok(false);
        }
        let abs = self.root.join(path.as_str());
        let canonical = std::fs::canonicalize(&abs).with_context(|| format!("resolve {abs}"))?;
        Ok(self.canonical.contains(&canonical))
    }
}
