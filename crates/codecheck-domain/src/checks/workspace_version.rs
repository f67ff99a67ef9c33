use crate::model::WorkspaceVersionPair;
use codecheck_types::{Diagnostic, ids};

/// Pass iff the package version and the workspace package version are textually equal.
pub fn check_versions_equal(
    check_id: &str,
    pair: &WorkspaceVersionPair,
    out: &mut Vec<Diagnostic>,
) -> bool {
    if pair.package_version == pair.workspace_version {
        return true;
    }
    out.push(Diagnostic::repo_level(
        check_id,
        ids::CODE_WORKSPACE_VERSION_MISMATCH,
        format!(
            "Workspace vs package versions mismatch in {}: '{}' != '{}'",
            pair.manifest, pair.package_version, pair.workspace_version
        ),
    ));
    false
}
