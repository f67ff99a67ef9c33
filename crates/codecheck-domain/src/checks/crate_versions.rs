use crate::model::LockfileModel;
use codecheck_types::{Diagnostic, ids};

/// Pass iff the lockfile records exactly one version of `crate_name`.
pub fn check_single_version(
    check_id: &str,
    lockfile: &LockfileModel,
    crate_name: &str,
    out: &mut Vec<Diagnostic>,
) -> bool {
    let versions = lockfile.versions_of(crate_name);
    match versions.len() {
        1 => true,
        0 => {
            out.push(Diagnostic::repo_level(
                check_id,
                ids::CODE_CRATE_MISSING,
                format!("Crate missing: '{crate_name}'"),
            ));
            false
        }
        _ => {
            out.push(Diagnostic::repo_level(
                check_id,
                ids::CODE_MULTIPLE_VERSIONS,
                format!(
                    "Multiple versions of '{}': {}",
                    crate_name,
                    versions.join(", ")
                ),
            ));
            false
        }
    }
}
