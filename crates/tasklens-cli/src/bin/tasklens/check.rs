//! `check` command handler.

use std::path::Path;

use tasklens_decode::{LookupTables, RecordKind, Registry};

use crate::style;

pub fn run_check(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = crate::load_config(config_path)?;
    let tables = LookupTables::builtin();
    let registry = Registry::builtin(&tables)?;

    println!("{}", style::accent("Schema data"));
    for kind in RecordKind::ALL {
        println!("  {kind}: {} code(s)", registry.entries(kind).count());
    }
    println!("  lookup tables: {}", tables.len());
    println!("{}", style::accent("Render config"));
    println!("  mode: {:?}", config.mode);
    println!("  continuation cap: {}", config.continuation_cap);
    println!("{}", style::success("OK"));
    Ok(())
}
