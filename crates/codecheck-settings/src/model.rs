use codecheck_types::RepoPath;
use serde::Deserialize;

/// Built-in defaults schema v1.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DefaultsV1 {
    /// Optional schema string for tooling (`codecheck.defaults.v1`).
    #[serde(default)]
    pub schema: Option<String>,

    /// Extension of source files to scan (`rs`), matched case-insensitively.
    pub source_extension: String,

    /// Directories excluded from every traversal.
    #[serde(default)]
    pub always_exclude: Vec<RepoPath>,

    /// Forbidden patterns, in execution order.
    #[serde(default)]
    pub disallow: Vec<DisallowConfig>,

    pub license: LicenseConfig,

    pub markers: MarkerConfig,

    pub dependencies: DependencyConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DisallowConfig {
    pub check_id: String,
    pub pattern: String,
    #[serde(default)]
    pub exclude: Vec<RepoPath>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LicenseConfig {
    /// One regex per header line, in required order.
    pub template: Vec<String>,
    #[serde(default)]
    pub exempt: Vec<RepoPath>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarkerConfig {
    pub literals: Vec<String>,
    #[serde(default)]
    pub exempt: Vec<RepoPath>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DependencyConfig {
    pub lockfile: RepoPath,
    pub manifest: RepoPath,
    #[serde(default)]
    pub single_version: Vec<String>,
}
