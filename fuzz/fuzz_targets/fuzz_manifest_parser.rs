//! Fuzz target for `Cargo.lock` and root `Cargo.toml` parsing.
//!
//! Goal: the parsers should **never panic** on any input.
//! Malformed input must surface as a `ManifestError`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_manifest_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = codecheck_repo::fuzz::parse_lockfile(text);
        let _ = codecheck_repo::fuzz::parse_root_manifest(text);
    }
});
