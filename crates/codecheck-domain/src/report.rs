use codecheck_types::Diagnostic;

/// Result of one check: a boolean plus the diagnostics that explain it.
#[derive(Clone, Debug)]
pub struct CheckOutcome {
    pub check_id: String,
    pub title: String,
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckOutcome {
    pub fn new(check_id: &str, title: impl Into<String>) -> Self {
        Self {
            check_id: check_id.to_string(),
            title: title.into(),
            passed: true,
            diagnostics: Vec::new(),
        }
    }

    /// Fold a sub-check result into this outcome.
    pub fn record(&mut self, passed: bool) {
        self.passed &= passed;
    }

    /// Content checks pass iff nothing was reported.
    pub fn from_diagnostics(
        check_id: &str,
        title: impl Into<String>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            check_id: check_id.to_string(),
            title: title.into(),
            passed: diagnostics.is_empty(),
            diagnostics,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl RunReport {
    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    /// Logical AND over every check.
    pub fn verdict(&self) -> Verdict {
        if self.outcomes.iter().all(|o| o.passed) {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn failed_checks(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.check_id.as_str())
            .collect()
    }
}
