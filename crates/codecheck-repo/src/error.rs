use camino::Utf8PathBuf;
use codecheck_types::RepoPath;

/// Malformed or unreadable manifest input. Always fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse lockfile {path}")]
    Lockfile {
        path: RepoPath,
        #[source]
        source: toml::de::Error,
    },

    #[error("parse manifest {path}")]
    Manifest {
        path: RepoPath,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("{path}: missing required field `{field}`")]
    MissingField { path: RepoPath, field: &'static str },

    #[error("{path}: field `{field}` must be a string")]
    InvalidField { path: RepoPath, field: &'static str },
}
