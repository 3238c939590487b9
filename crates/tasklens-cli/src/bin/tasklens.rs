//! CLI entrypoint for tasklens.

#[path = "tasklens/check.rs"]
mod check;
#[path = "tasklens/cli.rs"]
mod cli;
#[path = "tasklens/codes.rs"]
mod codes;
#[path = "tasklens/report.rs"]
mod report;
#[path = "tasklens/style.rs"]
mod style;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tasklens_decode::RenderConfig;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    if let Err(err) = run() {
        eprintln!("{}", style::error(format!("Error: {err:#}")));
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Report {
            backup,
            output,
            plain,
        } => report::run_report(&backup, output.as_deref(), cli.config.as_deref(), plain),
        Command::Codes { kind, json } => codes::run_codes(kind.map(Into::into), json),
        Command::Check => check::run_check(cli.config.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Render configuration from `path`, or the HTML defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<RenderConfig> {
    match path {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load render config {}", path.display())),
        None => Ok(RenderConfig::default()),
    }
}
