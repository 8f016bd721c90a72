//! # zuulcilint entry point
//!
//! Parses command-line arguments, loads the schema, and dispatches to the
//! lint driver. The flag surface is deliberately flat:
//!
//! ```text
//! zuulcilint [-h] [--version] [--check-playbook-paths] [--schema SCHEMA]
//!            [--ignore-warnings] [--warnings-as-errors] file [file ...]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zuulcilint_core::WarningMode;
use zuulcilint_schema::ZuulSchema;

use zuulcilint_cli::{discover, lint, report};

/// A linter for Zuul CI configuration files.
#[derive(Parser, Debug)]
#[command(name = "zuulcilint", version, about, long_about = None)]
struct Cli {
    /// YAML file(s) or directory tree(s) to lint.
    #[arg(value_name = "file", required = true)]
    files: Vec<PathBuf>,

    /// Check that referenced playbook paths exist on disk.
    #[arg(short = 'c', long)]
    check_playbook_paths: bool,

    /// Path to an alternative Zuul schema (JSON or YAML).
    #[arg(short = 's', long, value_name = "SCHEMA")]
    schema: Option<PathBuf>,

    /// Collect warnings but do not print them or fail because of them.
    #[arg(short = 'i', long)]
    ignore_warnings: bool,

    /// Treat warnings as errors. Takes precedence over --ignore-warnings.
    #[arg(long)]
    warnings_as_errors: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(passed) => {
            if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            // Schema problems are fatal; nothing was linted.
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let schema = match &cli.schema {
        Some(path) => ZuulSchema::from_file(path)
            .with_context(|| format!("failed to load schema from {}", path.display()))?,
        None => ZuulSchema::bundled().context("failed to load bundled schema")?,
    };
    tracing::debug!(kinds = ?schema.known_kinds(), "schema ready");

    let mode = WarningMode::from_flags(cli.warnings_as_errors, cli.ignore_warnings);
    let opts = lint::LintOptions {
        check_playbook_paths: cli.check_playbook_paths,
        project_root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let discovered = discover::discover(&cli.files);
    tracing::debug!(
        yaml = discovered.yaml.len(),
        legacy = discovered.legacy_yml.len(),
        missing = discovered.missing.len(),
        "discovered inputs"
    );

    let summary = lint::lint_files(&schema, &discovered, &opts);
    report::print(&summary, mode);
    Ok(summary.passed(mode))
}
