use crate::checks::license_header::LicenseTemplate;
use crate::checks::markers::MarkerSet;
use codecheck_types::RepoPath;
use regex::Regex;

/// Forbid a regex anywhere in source files outside `exclude`.
#[derive(Clone, Debug)]
pub struct DisallowPolicy {
    pub check_id: String,
    pub pattern: Regex,
    pub exclude: Vec<RepoPath>,
}

#[derive(Clone, Debug)]
pub struct LicensePolicy {
    pub template: LicenseTemplate,
    pub exempt: Vec<RepoPath>,
}

#[derive(Clone, Debug)]
pub struct MarkerPolicy {
    pub markers: MarkerSet,
    pub exempt: Vec<RepoPath>,
}

#[derive(Clone, Debug)]
pub struct DependencyPolicy {
    pub lockfile: RepoPath,
    pub manifest: RepoPath,
    /// Crates that must resolve to exactly one version in the lockfile.
    pub single_version: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    /// Source-file extension without the dot, compared case-insensitively.
    pub source_extension: String,
    /// Directories excluded from every traversal.
    pub always_exclude: Vec<RepoPath>,
    pub disallow: Vec<DisallowPolicy>,
    pub license: LicensePolicy,
    pub markers: MarkerPolicy,
    pub dependencies: DependencyPolicy,
}

impl EffectiveConfig {
    /// The exclusion list for one traversal: the global entries plus `extra`.
    pub fn exclusions_with(&self, extra: &[RepoPath]) -> Vec<RepoPath> {
        let mut out = self.always_exclude.clone();
        out.extend(extra.iter().cloned());
        out
    }
}
