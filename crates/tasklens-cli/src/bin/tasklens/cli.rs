//! CLI definitions for tasklens.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tasklens_decode::RecordKind;

const AFTER_HELP: &str = "Examples:
  tasklens report backup.xml -o report.html
  tasklens report backup.xml --plain
  tasklens codes --kind state
  tasklens check --config tasklens.toml";

#[derive(Debug, Parser)]
#[command(
    name = "tasklens",
    version,
    about = "Readable reports from automation backup files",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Show debug logging.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Render configuration file (TOML).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a backup into a report.
    Report {
        /// Backup XML file.
        backup: PathBuf,
        /// Output file (defaults to stdout).
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Plain text instead of HTML.
        #[arg(long)]
        plain: bool,
    },
    /// List the known action, state and event codes.
    Codes {
        /// Only list one record kind.
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Validate the built-in schema data and the render configuration.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Task,
    State,
    Event,
}

impl From<KindArg> for RecordKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Task => RecordKind::Task,
            KindArg::State => RecordKind::State,
            KindArg::Event => RecordKind::Event,
        }
    }
}
