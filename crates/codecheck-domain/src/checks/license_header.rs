use crate::model::{SourceFile, normalize_newlines};
use codecheck_types::{Diagnostic, ids};
use regex::Regex;

pub const LICENSE_MISSING_MESSAGE: &str = "License missing or incorrect";

/// An ordered list of per-line patterns compiled into one multi-line matcher.
///
/// Entry `n` must match the line directly after the line matched by entry
/// `n - 1`, so the header is only accepted as a contiguous block in template order.
#[derive(Clone, Debug)]
pub struct LicenseTemplate {
    entries: Vec<String>,
    matcher: Regex,
}

impl LicenseTemplate {
    pub fn compile<S: AsRef<str>>(entries: &[S]) -> Result<Self, regex::Error> {
        let entries: Vec<String> = entries.iter().map(|e| e.as_ref().to_string()).collect();
        let joined = entries
            .iter()
            .map(|e| format!("(?:{e})"))
            .collect::<Vec<_>>()
            .join("\n");
        let matcher = Regex::new(&joined)?;
        Ok(Self { entries, matcher })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Search the whole text for the header block. CRLF and lone CR line endings are accepted.
    pub fn is_satisfied_by(&self, text: &str) -> bool {
        self.matcher.is_match(&normalize_newlines(text))
    }
}

/// Report `file` once if it lacks the header block.
pub fn check(
    check_id: &str,
    template: &LicenseTemplate,
    file: &SourceFile,
    out: &mut Vec<Diagnostic>,
) -> bool {
    if template.is_satisfied_by(&file.text) {
        return true;
    }
    out.push(Diagnostic::in_file(
        check_id,
        ids::CODE_LICENSE_MISSING,
        &file.path,
        LICENSE_MISSING_MESSAGE,
    ));
    false
}
