use crate::path::RepoPath;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: RepoPath,
    /// 1-based line number, when the violation is tied to a single line.
    pub line: Option<u32>,
}

/// One printed violation.
///
/// The `Display` form is the exact line written to the report:
/// - `path:line:message` for line-level violations
/// - `path: message` for file-level violations
/// - `message` for repository-level violations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub check_id: String,
    pub code: String,
    pub message: String,
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn at_line(check_id: &str, code: &str, path: &RepoPath, line: u32, message: &str) -> Self {
        Self {
            check_id: check_id.to_string(),
            code: code.to_string(),
            message: message.to_string(),
            location: Some(Location {
                path: path.clone(),
                line: Some(line),
            }),
        }
    }

    pub fn in_file(check_id: &str, code: &str, path: &RepoPath, message: &str) -> Self {
        Self {
            check_id: check_id.to_string(),
            code: code.to_string(),
            message: message.to_string(),
            location: Some(Location {
                path: path.clone(),
                line: None,
            }),
        }
    }

    pub fn repo_level(check_id: &str, code: &str, message: String) -> Self {
        Self {
            check_id: check_id.to_string(),
            code: code.to_string(),
            message,
            location: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(Location {
                path,
                line: Some(line),
            }) => write!(f, "{}:{}:{}", path, line, self.message),
            Some(Location { path, line: None }) => write!(f, "{}: {}", path, self.message),
            None => f.write_str(&self.message),
        }
    }
}
