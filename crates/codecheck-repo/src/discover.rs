use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use codecheck_types::RepoPath;
use std::collections::BTreeSet;
use walkdir::{DirEntry, FilterEntry, WalkDir};

/// Directory subtrees excluded from one traversal.
///
/// Entries are repo-relative and compared case-insensitively against the
/// directory's full relative path, so `rpc` excludes `./rpc` but not `./wallet/rpc`.
#[derive(Clone, Debug, Default)]
pub struct ExclusionSet {
    dirs: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a RepoPath>,
    {
        Self {
            dirs: entries.into_iter().map(|p| p.match_key()).collect(),
        }
    }

    pub fn contains(&self, rel_dir: &RepoPath) -> bool {
        self.dirs.contains(&rel_dir.match_key())
    }
}

type EntryFilter = Box<dyn FnMut(&DirEntry) -> bool>;

/// Lazy, deterministic walk yielding repo-relative paths of source files.
///
/// Directories are pruned before descent; entries within a directory are visited
/// in file-name order. Symlinked files are yielded under their own path;
/// symlinked directories are not followed.
pub struct SourceFiles {
    root: Utf8PathBuf,
    extension: String,
    walker: FilterEntry<walkdir::IntoIter, EntryFilter>,
}

/// Enumerate files under `root` whose extension equals `extension` (case-insensitive),
/// skipping every directory listed in `exclusions`.
pub fn source_files(root: &Utf8Path, extension: &str, exclusions: ExclusionSet) -> SourceFiles {
    let prune_root = root.to_path_buf();
    let filter: EntryFilter = Box::new(move |entry: &DirEntry| {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let Some(rel) = relative(&prune_root, entry) else {
            return true;
        };
        if exclusions.contains(&rel) {
            tracing::debug!(dir = %rel, "skipping excluded directory");
            return false;
        }
        true
    });

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(filter);

    SourceFiles {
        root: root.to_path_buf(),
        extension: extension.to_string(),
        walker,
    }
}

impl Iterator for SourceFiles {
    type Item = anyhow::Result<RepoPath>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    return Some(Err(anyhow::Error::new(err).context(format!("walk {}", self.root))));
                }
            };
            if !is_source_candidate(&entry) || !has_extension(&entry, &self.extension) {
                continue;
            }
            let item = relative(&self.root, &entry)
                .with_context(|| format!("non UTF-8 path: {}", entry.path().display()));
            return Some(item);
        }
    }
}

/// Regular files, plus symlinks that resolve to a regular file. Directory symlinks are
/// reported by walkdir as symlinks too, but are never descended into.
fn is_source_candidate(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn has_extension(entry: &DirEntry, extension: &str) -> bool {
    entry
        .path()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn relative(root: &Utf8Path, entry: &DirEntry) -> Option<RepoPath> {
    let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
    Utf8Path::from_path(rel).map(RepoPath::from)
}
