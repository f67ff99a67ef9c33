use crate::model::SourceFile;
use codecheck_types::{Diagnostic, ids};
use regex::Regex;

/// Report every line of `file` matching `pattern`.
///
/// Trailing whitespace is stripped before matching and the stripped line is
/// what gets reported. Scanning never stops early: all matches are collected.
pub fn scan(check_id: &str, pattern: &Regex, file: &SourceFile, out: &mut Vec<Diagnostic>) {
    for (idx, line) in file.text.lines().enumerate() {
        let line = line.trim_end();
        if pattern.is_match(line) {
            out.push(Diagnostic::at_line(
                check_id,
                ids::CODE_FORBIDDEN_PATTERN,
                &file.path,
                line_number(idx),
                line,
            ));
        }
    }
}

/// 1-based line number for a 0-based index, saturating at `u32::MAX`.
fn line_number(idx: usize) -> u32 {
    idx.checked_add(1)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(u32::MAX)
}
