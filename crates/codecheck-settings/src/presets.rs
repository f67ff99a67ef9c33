use crate::model::DefaultsV1;
use anyhow::Context;

/// The policy compiled into the binary.
pub const DEFAULTS_TOML: &str = include_str!("defaults.toml");

pub fn builtin() -> anyhow::Result<DefaultsV1> {
    crate::parse_defaults_toml(DEFAULTS_TOML).context("parse built-in defaults")
}
