use codecheck_types::RepoPath;
use std::borrow::Cow;

/// A source file read for the duration of one check.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: RepoPath,
    pub text: String,
}

impl SourceFile {
    /// `text` is stored with `\r\n` and lone `\r` line endings rewritten to `\n`.
    pub fn new(path: impl Into<RepoPath>, text: impl Into<String>) -> Self {
        let text: String = text.into();
        let text = if text.contains('\r') {
            normalize_newlines(&text).into_owned()
        } else {
            text
        };
        Self {
            path: path.into(),
            text,
        }
    }
}

/// Universal newlines: `\r\n` and lone `\r` both become `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// The `[[package]]` list of a resolved `Cargo.lock`.
#[derive(Clone, Debug, Default)]
pub struct LockfileModel {
    pub packages: Vec<LockedPackage>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockedPackage {
    pub name: String,
    pub version: String,
}

impl LockfileModel {
    /// Distinct versions recorded for `name`, in lockfile order.
    pub fn versions_of(&self, name: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for p in self.packages.iter().filter(|p| p.name == name) {
            if !out.contains(&p.version.as_str()) {
                out.push(p.version.as_str());
            }
        }
        out
    }
}

/// `package.version` and `workspace.package.version` of the root manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceVersionPair {
    pub manifest: RepoPath,
    pub package_version: String,
    pub workspace_version: String,
}
