//! Plain-text rendering of check groups and the run summary.

use codecheck_domain::{CheckOutcome, RunReport, Verdict};
use std::io::{self, Write};

/// `==== <title>:` followed by one line per diagnostic and a blank line.
pub fn write_group(out: &mut dyn Write, outcome: &CheckOutcome) -> io::Result<()> {
    writeln!(out, "==== {}:", outcome.title)?;
    for diagnostic in &outcome.diagnostics {
        writeln!(out, "{diagnostic}")?;
    }
    writeln!(out)
}

pub fn write_summary(out: &mut dyn Write, report: &RunReport) -> io::Result<()> {
    match report.verdict() {
        Verdict::Pass => writeln!(out, "codecheck: all checks passed"),
        Verdict::Fail => {
            let failed = report.failed_checks();
            writeln!(
                out,
                "codecheck: {} of {} checks failed: {}",
                failed.len(),
                report.outcomes.len(),
                failed.join(", ")
            )
        }
    }
}
