//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - exact line attribution of forbidden-pattern matches
//! - contiguity and ordering of the license header block
//! - once-per-file marker reporting
//! - the single-version rule over arbitrary lockfiles

use crate::checks::{crate_versions, disallow, license_header, markers};
use crate::test_support::{HEADER, lockfile, markers as marker_set, source, template};
use codecheck_types::ids;
use proptest::prelude::*;
use regex::Regex;

// ============================================================================
// Strategies
// ============================================================================

/// Filler lines that can never match a forbidden pattern, a marker, or a header line.
fn arb_filler_line() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,40}").unwrap()
}

fn arb_filler(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_filler_line(), 0..max)
}

fn arb_version() -> impl Strategy<Value = String> {
    (0u32..5, 0u32..20, 0u32..20).prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
}

// ============================================================================
// Pattern matcher
// ============================================================================

proptest! {
    #[test]
    fn forbidden_line_is_reported_at_its_exact_line(
        before in arb_filler(30),
        after in arb_filler(30),
    ) {
        let pattern = Regex::new(r"\bjsonrpsee[_a-z0-9]*::").unwrap();
        let mut lines = before.clone();
        lines.push("use jsonrpsee::core::RpcResult;".to_string());
        lines.extend(after);
        let file = source("node/src/rpc.rs", &lines.join("\n"));

        let mut out = Vec::new();
        disallow::scan(ids::CHECK_IMPORTS_JSONRPSEE, &pattern, &file, &mut out);

        prop_assert_eq!(out.len(), 1);
        let line = out[0].location.as_ref().and_then(|l| l.line);
        prop_assert_eq!(line, Some(before.len() as u32 + 1));
    }

    #[test]
    fn every_occurrence_is_collected(positions in prop::collection::btree_set(0usize..40, 1..6)) {
        let pattern = Regex::new(r"\bparity_scale_codec(_derive)?::").unwrap();
        let lines: Vec<String> = (0..40)
            .map(|i| {
                if positions.contains(&i) {
                    "use parity_scale_codec::Encode;".to_string()
                } else {
                    format!("fn f{i}() {{}}")
                }
            })
            .collect();
        let file = source("a.rs", &lines.join("\n"));

        let mut out = Vec::new();
        disallow::scan(ids::CHECK_IMPORTS_SCALE_CODEC, &pattern, &file, &mut out);

        let reported: Vec<u32> = out.iter().filter_map(|d| d.location.as_ref()?.line).collect();
        let expected: Vec<u32> = positions.iter().map(|p| *p as u32 + 1).collect();
        prop_assert_eq!(reported, expected);
    }
}

// ============================================================================
// License header
// ============================================================================

proptest! {
    #[test]
    fn embedded_header_block_passes(before in arb_filler(10), after in arb_filler(10)) {
        let mut lines = before;
        lines.extend(HEADER.iter().map(|l| l.to_string()));
        lines.push(String::new());
        lines.extend(after);

        prop_assert!(template().is_satisfied_by(&lines.join("\n")));
    }

    #[test]
    fn removing_any_required_line_fails(idx in 0usize..14, after in arb_filler(10)) {
        let mut lines: Vec<String> = HEADER.iter().map(|l| l.to_string()).collect();
        lines.remove(idx);
        lines.push(String::new());
        lines.extend(after);

        let file = source("a.rs", &lines.join("\n"));
        let mut out = Vec::new();
        prop_assert!(!license_header::check(ids::CHECK_LICENSE_HEADER, &template(), &file, &mut out));
        prop_assert_eq!(out.len(), 1);
    }

    #[test]
    fn swapping_adjacent_distinct_lines_fails(idx in 0usize..13) {
        let mut lines: Vec<String> = HEADER.iter().map(|l| l.to_string()).collect();
        prop_assume!(lines[idx] != lines[idx + 1]);
        lines.swap(idx, idx + 1);
        lines.push(String::new());

        prop_assert!(!template().is_satisfied_by(&lines.join("\n")));
    }
}

// ============================================================================
// Markers
// ============================================================================

proptest! {
    #[test]
    fn marker_files_are_reported_once(
        filler in arb_filler(20),
        count in 1usize..8,
        which in 0usize..3,
    ) {
        let m = marker_set();
        let marker = m.literals()[which].clone();
        let mut lines = filler;
        for _ in 0..count {
            lines.push(format!("// {marker}"));
        }
        let file = source("wip.rs", &lines.join("\n"));

        let mut out = Vec::new();
        prop_assert!(!markers::check(ids::CHECK_MARKERS_UNRESOLVED, &m, &file, &mut out));
        prop_assert_eq!(out.len(), 1);
    }

    #[test]
    fn marker_free_files_pass(filler in arb_filler(40)) {
        let file = source("ok.rs", &filler.join("\n"));
        let mut out = Vec::new();
        prop_assert!(markers::check(ids::CHECK_MARKERS_UNRESOLVED, &marker_set(), &file, &mut out));
        prop_assert!(out.is_empty());
    }
}

// ============================================================================
// Single-version rule
// ============================================================================

proptest! {
    #[test]
    fn single_version_holds_iff_one_distinct_version(
        versions in prop::collection::vec(arb_version(), 0..5),
        others in prop::collection::vec(arb_version(), 0..5),
    ) {
        let mut packages: Vec<(&str, &str)> = versions
            .iter()
            .map(|v| ("parity-scale-codec", v.as_str()))
            .collect();
        packages.extend(others.iter().map(|v| ("serde", v.as_str())));
        let lock = lockfile(&packages);

        let mut distinct: Vec<&str> = Vec::new();
        for v in &versions {
            if !distinct.contains(&v.as_str()) {
                distinct.push(v.as_str());
            }
        }

        let mut out = Vec::new();
        let passed = crate_versions::check_single_version(
            ids::CHECK_DEPS_CRATE_VERSIONS,
            &lock,
            "parity-scale-codec",
            &mut out,
        );

        prop_assert_eq!(passed, distinct.len() == 1);
        match distinct.len() {
            0 => {
                prop_assert_eq!(out[0].code.as_str(), ids::CODE_CRATE_MISSING);
            }
            1 => {
                prop_assert!(out.is_empty());
            }
            _ => {
                prop_assert_eq!(out[0].code.as_str(), ids::CODE_MULTIPLE_VERSIONS);
                prop_assert!(out[0].message.ends_with(&distinct.join(", ")));
            }
        }
    }
}
