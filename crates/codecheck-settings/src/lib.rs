//! Built-in policy parsing and resolution.
//!
//! This crate is intentionally IO-free: the policy is a TOML document embedded at compile time,
//! parsed into a typed model and resolved into compiled matchers for the engine.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{DefaultsV1, DependencyConfig, DisallowConfig, LicenseConfig, MarkerConfig};
pub use presets::{DEFAULTS_TOML, builtin};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse a defaults document into a typed model.
pub fn parse_defaults_toml(input: &str) -> anyhow::Result<DefaultsV1> {
    let cfg: DefaultsV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (defaults + per-run overrides).
pub fn resolve_config(cfg: DefaultsV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// Resolve the built-in policy with `overrides` applied.
pub fn load_builtin(overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve_config(builtin()?, overrides)
}
