//! `report` command handler.

use std::path::Path;

use anyhow::Context;
use tasklens_cli::{document, render_report, Backup};
use tasklens_decode::{Engine, OutputMode};

use crate::style;

pub fn run_report(
    backup_path: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    plain: bool,
) -> anyhow::Result<()> {
    let mut config = crate::load_config(config_path)?;
    if plain {
        config = config.with_mode(OutputMode::Plain);
    }
    let mode = config.mode;

    let text = std::fs::read_to_string(backup_path)
        .with_context(|| format!("failed to read {}", backup_path.display()))?;
    let doc = roxmltree::Document::parse(&text)
        .with_context(|| format!("failed to parse {}", backup_path.display()))?;
    let backup = Backup::index(&doc)?;

    let mut engine = Engine::new(config).context("built-in schema data is invalid")?;
    let mut lines = Vec::new();
    render_report(&backup, &mut engine, &mut lines);

    let title = backup_path
        .file_name()
        .map_or_else(|| "tasklens report".to_string(), |name| name.to_string_lossy().into_owned());
    let rendered = document(&title, &lines, mode);
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "{}",
                style::success(format!("Wrote {} line(s) to {}", lines.len(), path.display()))
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
