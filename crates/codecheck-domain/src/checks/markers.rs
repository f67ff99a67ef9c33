use crate::model::SourceFile;
use aho_corasick::AhoCorasick;
use codecheck_types::{Diagnostic, ids};

/// A fixed set of literal, case-sensitive "unresolved work" markers.
#[derive(Clone, Debug)]
pub struct MarkerSet {
    literals: Vec<String>,
    automaton: AhoCorasick,
}

impl MarkerSet {
    pub fn new<S: AsRef<str>>(literals: &[S]) -> Result<Self, aho_corasick::BuildError> {
        let literals: Vec<String> = literals.iter().map(|l| l.as_ref().to_string()).collect();
        let automaton = AhoCorasick::new(&literals)?;
        Ok(Self {
            literals,
            automaton,
        })
    }

    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// The first marker occurring in `text`, if any.
    pub fn find_first(&self, text: &str) -> Option<&str> {
        self.automaton
            .find(text)
            .map(|m| self.literals[m.pattern().as_usize()].as_str())
    }

    /// `TODO(PR) or FIXME or todo!()`
    pub fn describe(&self, conjunction: &str) -> String {
        self.literals.join(&format!(" {conjunction} "))
    }
}

/// Report `file` once if any marker occurs in it, however many times.
pub fn check(
    check_id: &str,
    markers: &MarkerSet,
    file: &SourceFile,
    out: &mut Vec<Diagnostic>,
) -> bool {
    if markers.find_first(&file.text).is_none() {
        return true;
    }
    out.push(Diagnostic::in_file(
        check_id,
        ids::CODE_UNRESOLVED_MARKER,
        &file.path,
        &format!("Found {} instances", markers.describe("or")),
    ));
    false
}
