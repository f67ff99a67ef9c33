//! Stable identifiers for checks and diagnostic codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_IMPORTS_SCALE_CODEC: &str = "imports.scale_codec";
pub const CHECK_IMPORTS_JSONRPSEE: &str = "imports.jsonrpsee";
pub const CHECK_LICENSE_HEADER: &str = "license.header";
pub const CHECK_DEPS_CRATE_VERSIONS: &str = "deps.crate_versions";
pub const CHECK_MARKERS_UNRESOLVED: &str = "markers.unresolved";

// Codes: imports.*
pub const CODE_FORBIDDEN_PATTERN: &str = "forbidden_pattern";

// Codes: license.header
pub const CODE_LICENSE_MISSING: &str = "license_missing";

// Codes: deps.crate_versions
pub const CODE_CRATE_MISSING: &str = "crate_missing";
pub const CODE_MULTIPLE_VERSIONS: &str = "multiple_versions";
pub const CODE_WORKSPACE_VERSION_MISMATCH: &str = "workspace_version_mismatch";

// Codes: markers.unresolved
pub const CODE_UNRESOLVED_MARKER: &str = "unresolved_marker";
