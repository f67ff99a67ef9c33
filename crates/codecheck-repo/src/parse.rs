use crate::error::ManifestError;
use codecheck_domain::model::{LockedPackage, LockfileModel, WorkspaceVersionPair};
use codecheck_types::RepoPath;
use serde::Deserialize;
use toml_edit::DocumentMut;

#[derive(Deserialize)]
struct RawLockfile {
    package: Vec<RawPackage>,
}

#[derive(Deserialize)]
struct RawPackage {
    name: String,
    version: String,
}

pub fn parse_lockfile(path: &RepoPath, text: &str) -> Result<LockfileModel, ManifestError> {
    let raw: RawLockfile = toml::from_str(text).map_err(|source| ManifestError::Lockfile {
        path: path.clone(),
        source,
    })?;

    Ok(LockfileModel {
        packages: raw
            .package
            .into_iter()
            .map(|p| LockedPackage {
                name: p.name,
                version: p.version,
            })
            .collect(),
    })
}

pub fn parse_root_manifest(
    path: &RepoPath,
    text: &str,
) -> Result<WorkspaceVersionPair, ManifestError> {
    let doc = text
        .parse::<DocumentMut>()
        .map_err(|source| ManifestError::Manifest {
            path: path.clone(),
            source,
        })?;

    Ok(WorkspaceVersionPair {
        manifest: path.clone(),
        package_version: string_field(&doc, path, &["package", "version"], "package.version")?,
        workspace_version: string_field(
            &doc,
            path,
            &["workspace", "package", "version"],
            "workspace.package.version",
        )?,
    })
}

fn string_field(
    doc: &DocumentMut,
    path: &RepoPath,
    keys: &[&str],
    field: &'static str,
) -> Result<String, ManifestError> {
    let item = keys
        .iter()
        .try_fold(doc.as_item(), |item, key| item.get(*key))
        .ok_or_else(|| ManifestError::MissingField {
            path: path.clone(),
            field,
        })?;

    item.as_str()
        .map(str::to_string)
        .ok_or_else(|| ManifestError::InvalidField {
            path: path.clone(),
            field,
        })
}
