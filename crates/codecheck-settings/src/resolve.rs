use crate::model::{DefaultsV1, DisallowConfig};
use anyhow::Context;
use codecheck_domain::policy::{
    DependencyPolicy, DisallowPolicy, EffectiveConfig, LicensePolicy, MarkerPolicy,
};
use codecheck_domain::{LicenseTemplate, MarkerSet};
use codecheck_types::RepoPath;
use regex::Regex;
use std::collections::BTreeSet;

/// Per-run adjustments supplied on the command line.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Extra files exempted from the unresolved-marker check.
    pub marker_exempt: Vec<RepoPath>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(cfg: DefaultsV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let source_extension = cfg.source_extension.trim_start_matches('.').to_string();
    if source_extension.is_empty() {
        anyhow::bail!("source_extension must not be empty");
    }

    let disallow = resolve_disallow(&cfg.disallow)?;

    if cfg.license.template.is_empty() {
        anyhow::bail!("license template must have at least one line");
    }
    let template =
        LicenseTemplate::compile(&cfg.license.template).context("compile license template")?;

    if let Some(pos) = cfg.markers.literals.iter().position(|l| l.is_empty()) {
        anyhow::bail!("marker literal #{pos} is empty");
    }
    let markers = MarkerSet::new(&cfg.markers.literals).context("build marker automaton")?;
    let mut marker_exempt = cfg.markers.exempt;
    marker_exempt.extend(overrides.marker_exempt);

    if cfg.dependencies.single_version.iter().any(|n| n.trim().is_empty()) {
        anyhow::bail!("single_version crate names must not be empty");
    }

    let effective = EffectiveConfig {
        source_extension,
        always_exclude: cfg.always_exclude,
        disallow,
        license: LicensePolicy {
            template,
            exempt: cfg.license.exempt,
        },
        markers: MarkerPolicy {
            markers,
            exempt: marker_exempt,
        },
        dependencies: DependencyPolicy {
            lockfile: cfg.dependencies.lockfile,
            manifest: cfg.dependencies.manifest,
            single_version: cfg.dependencies.single_version,
        },
    };

    Ok(ResolvedConfig { effective })
}

fn resolve_disallow(entries: &[DisallowConfig]) -> anyhow::Result<Vec<DisallowPolicy>> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.check_id.contains('.') {
            anyhow::bail!(
                "disallow check_id must be dotted (e.g. 'imports.foo'): {}",
                entry.check_id
            );
        }
        if !seen.insert(entry.check_id.as_str()) {
            anyhow::bail!("duplicate disallow check_id: {}", entry.check_id);
        }
        let pattern = Regex::new(&entry.pattern)
            .with_context(|| format!("invalid pattern for {}", entry.check_id))?;
        out.push(DisallowPolicy {
            check_id: entry.check_id.clone(),
            pattern,
            exclude: entry.exclude.clone(),
        });
    }
    Ok(out)
}
