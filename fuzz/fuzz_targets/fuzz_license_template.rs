//! Fuzz target for license template compilation and matching.
//!
//! Goal: compiling arbitrary template lines may fail, but neither compiling nor
//! matching should ever panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_license_template
//! ```

#![no_main]

use arbitrary::Arbitrary;
use codecheck_domain::LicenseTemplate;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct TemplateInput {
    /// Per-line patterns, joined into one multi-line matcher.
    lines: Vec<String>,
    /// File contents to search.
    text: String,
}

fuzz_target!(|input: TemplateInput| {
    // Keep regex compilation cheap
    if input.lines.len() > 20 || input.lines.iter().any(|l| l.len() > 128) {
        return;
    }

    if let Ok(template) = LicenseTemplate::compile(&input.lines) {
        let _ = template.is_satisfied_by(&input.text);
    }
});
