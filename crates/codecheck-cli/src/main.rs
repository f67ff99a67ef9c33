//! CLI entry point for codecheck.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup and exit codes.
//! All business logic lives in the `codecheck-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use codecheck_app::{CheckInput, run_check, verdict_exit_code};
use codecheck_settings::Overrides;
use codecheck_types::RepoPath;
use std::io::Write;

/// Exit code for errors that prevent a verdict (unreadable files, malformed manifests).
const FATAL_EXIT_CODE: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "codecheck",
    version,
    about = "Source-tree compliance checks: forbidden imports, license headers, crate versions, unresolved markers"
)]
struct Cli {
    /// Project root to check.
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Exempt a file (relative to the root) from the unresolved-marker check. Repeatable.
    #[arg(long = "allow-markers-in", value_name = "PATH")]
    allow_markers_in: Vec<String>,

    /// Log traversal and check progress to stderr (overrides CODECHECK_LOG).
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cmd_check(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("codecheck error: {err:#}");
            FATAL_EXIT_CODE
        }
    };
    std::process::exit(code);
}

fn cmd_check(cli: &Cli) -> anyhow::Result<i32> {
    let overrides = Overrides {
        marker_exempt: cli.allow_markers_in.iter().map(RepoPath::new).collect(),
    };
    tracing::debug!(repo_root = %cli.repo_root, ?overrides, "starting run");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = run_check(
        CheckInput {
            repo_root: &cli.repo_root,
            overrides,
        },
        &mut out,
    );
    out.flush().context("flush stdout")?;

    Ok(verdict_exit_code(result?.verdict()))
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("CODECHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
