//! `codes` command handler.

use tasklens_cli::code_rows;
use tasklens_decode::{LookupTables, RecordKind, Registry};

pub fn run_codes(kind: Option<RecordKind>, json: bool) -> anyhow::Result<()> {
    let tables = LookupTables::builtin();
    let registry = Registry::builtin(&tables)?;
    let rows = code_rows(&registry, kind);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in &rows {
        println!("{}", row.summary());
    }
    Ok(())
}
