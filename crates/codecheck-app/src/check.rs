//! The `check` use case: run every compliance check in order and stream the report.

use anyhow::Context;
use camino::Utf8Path;
use codecheck_domain::checks::{
    crate_versions, disallow, license_header, markers, workspace_version,
};
use codecheck_domain::policy::{DisallowPolicy, EffectiveConfig};
use codecheck_domain::{CheckOutcome, RunReport, Verdict};
use codecheck_repo::{ExclusionSet, ExemptionSet, SourceFiles};
use codecheck_settings::Overrides;
use codecheck_types::{RepoPath, ids};
use std::io::Write;

use crate::render::{write_group, write_summary};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// CLI overrides.
    pub overrides: Overrides,
}

#[derive(Clone, Copy, Debug)]
pub enum CheckKind<'a> {
    Disallow(&'a DisallowPolicy),
    LicenseHeader,
    CrateVersions,
    Markers,
}

/// One entry of the run plan.
#[derive(Clone, Debug)]
pub struct CheckDescriptor<'a> {
    pub id: &'a str,
    pub title: String,
    pub kind: CheckKind<'a>,
}

/// The fixed check order: forbidden patterns, license headers, crate versions, markers.
pub fn plan(cfg: &EffectiveConfig) -> Vec<CheckDescriptor<'_>> {
    let mut checks: Vec<CheckDescriptor<'_>> = cfg
        .disallow
        .iter()
        .map(|policy| CheckDescriptor {
            id: &policy.check_id,
            title: format!("Searching for '{}'", policy.pattern.as_str()),
            kind: CheckKind::Disallow(policy),
        })
        .collect();

    checks.push(CheckDescriptor {
        id: ids::CHECK_LICENSE_HEADER,
        title: "Checking local license headers".to_string(),
        kind: CheckKind::LicenseHeader,
    });
    checks.push(CheckDescriptor {
        id: ids::CHECK_DEPS_CRATE_VERSIONS,
        title: "Checking crate versions".to_string(),
        kind: CheckKind::CrateVersions,
    });
    checks.push(CheckDescriptor {
        id: ids::CHECK_MARKERS_UNRESOLVED,
        title: format!(
            "Checking {} instances",
            list_phrase(cfg.markers.markers.literals())
        ),
        kind: CheckKind::Markers,
    });
    checks
}

/// Run every planned check, writing each group to `out` as soon as it completes.
///
/// A failing check never stops the run; only fatal errors (unreadable files,
/// malformed manifests, walk errors) do.
pub fn run_check(input: CheckInput<'_>, out: &mut dyn Write) -> anyhow::Result<RunReport> {
    let resolved =
        codecheck_settings::load_builtin(input.overrides).context("resolve built-in policy")?;
    let cfg = &resolved.effective;

    let mut report = RunReport::default();
    for check in plan(cfg) {
        tracing::info!(check_id = check.id, "running check");
        let outcome = run_one(input.repo_root, cfg, &check)
            .with_context(|| format!("check {}", check.id))?;
        tracing::info!(
            check_id = check.id,
            passed = outcome.passed,
            diagnostics = outcome.diagnostics.len(),
            "check finished"
        );
        write_group(out, &outcome).context("write report")?;
        report.push(outcome);
    }
    write_summary(out, &report).context("write report")?;

    Ok(report)
}

/// Map verdict to exit code: 0 = pass, 1 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}

fn run_one(
    root: &Utf8Path,
    cfg: &EffectiveConfig,
    check: &CheckDescriptor<'_>,
) -> anyhow::Result<CheckOutcome> {
    let mut outcome = CheckOutcome::new(check.id, check.title.clone());

    match check.kind {
        CheckKind::Disallow(policy) => {
            for path in files(root, cfg, &policy.exclude) {
                let file = codecheck_repo::read_source(root, &path?)?;
                disallow::scan(check.id, &policy.pattern, &file, &mut outcome.diagnostics);
            }
            let passed = outcome.diagnostics.is_empty();
            outcome.record(passed);
        }
        CheckKind::LicenseHeader => {
            let exempt = ExemptionSet::resolve(root, &cfg.license.exempt);
            for path in files(root, cfg, &[]) {
                let path = path?;
                if exempt.contains(&path)? {
                    tracing::debug!(path = %path, "license check exempt");
                    continue;
                }
                let file = codecheck_repo::read_source(root, &path)?;
                let passed = license_header::check(
                    check.id,
                    &cfg.license.template,
                    &file,
                    &mut outcome.diagnostics,
                );
                outcome.record(passed);
            }
        }
        CheckKind::CrateVersions => {
            let deps = &cfg.dependencies;
            let lockfile = codecheck_repo::load_lockfile(root, &deps.lockfile)?;
            let pair = codecheck_repo::load_root_manifest(root, &deps.manifest)?;
            for name in &deps.single_version {
                let passed = crate_versions::check_single_version(
                    check.id,
                    &lockfile,
                    name,
                    &mut outcome.diagnostics,
                );
                outcome.record(passed);
            }
            let passed =
                workspace_version::check_versions_equal(check.id, &pair, &mut outcome.diagnostics);
            outcome.record(passed);
        }
        CheckKind::Markers => {
            let exempt = ExemptionSet::resolve(root, &cfg.markers.exempt);
            for path in files(root, cfg, &[]) {
                let path = path?;
                if exempt.contains(&path)? {
                    tracing::debug!(path = %path, "marker check exempt");
                    continue;
                }
                let file = codecheck_repo::read_source(root, &path)?;
                let passed = markers::check(
                    check.id,
                    &cfg.markers.markers,
                    &file,
                    &mut outcome.diagnostics,
                );
                outcome.record(passed);
            }
        }
    }

    Ok(outcome)
}

fn files(root: &Utf8Path, cfg: &EffectiveConfig, extra: &[RepoPath]) -> SourceFiles {
    let exclusions = cfg.exclusions_with(extra);
    codecheck_repo::source_files(root, &cfg.source_extension, ExclusionSet::new(&exclusions))
}

/// `a, b and c`
fn list_phrase(items: &[String]) -> String {
    match items {
        [] => "unresolved marker".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
