//! Check predicates. Each one inspects a single input and appends diagnostics;
//! traversal and reading happen in `codecheck-repo`, sequencing in `codecheck-app`.

pub mod crate_versions;
pub mod disallow;
pub mod license_header;
pub mod markers;
pub mod workspace_version;
