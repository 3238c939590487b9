//! Registry listing for the `codes` command.

use serde::Serialize;
use tasklens_decode::{RecordKind, Registry};

/// One registry entry, flattened for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRow {
    pub kind: String,
    pub code: String,
    pub name: String,
    pub slots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    pub deprecated: bool,
}

impl CodeRow {
    /// One-line text form: `task 548  Flash (arg0:Str, arg1:Int)`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut line = format!("{} {:<6} {}", self.kind, self.code, self.name);
        if self.deprecated {
            line.push_str(" (deprecated)");
        }
        if let Some(target) = &self.redirect {
            line.push_str(&format!(" -> {target}"));
        } else if !self.slots.is_empty() {
            line.push_str(&format!(" ({})", self.slots.join(", ")));
        }
        line
    }
}

/// Rows for every entry of `kind`, or of every kind when `None`.
#[must_use]
pub fn code_rows(registry: &Registry, kind: Option<RecordKind>) -> Vec<CodeRow> {
    RecordKind::ALL
        .into_iter()
        .filter(|candidate| kind.map_or(true, |kind| kind == *candidate))
        .flat_map(|kind| registry.entries(kind))
        .map(|(key, entry)| CodeRow {
            kind: key.kind.to_string(),
            code: key.code.to_string(),
            name: entry.display_name.to_string(),
            slots: entry
                .slots()
                .iter()
                .map(|(slot, ty)| format!("{slot}:{}", ty.tag()))
                .collect(),
            redirect: entry.redirect.as_ref().map(|target| target.code.to_string()),
            deprecated: registry.is_deprecated(key),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklens_decode::LookupTables;

    #[test]
    fn rows_filter_by_kind_and_summarize() {
        let tables = LookupTables::builtin();
        let registry = Registry::builtin(&tables).expect("static registry");
        let events = code_rows(&registry, Some(RecordKind::Event));
        assert!(events.iter().all(|row| row.kind == "event"));

        let tasks = code_rows(&registry, Some(RecordKind::Task));
        let flash = tasks.iter().find(|row| row.code == "548").expect("Flash row");
        assert_eq!(flash.summary(), "task 548    Flash (arg0:Str, arg1:Int)");
        let head = tasks.iter().find(|row| row.code == "117").expect("HTTP Head row");
        assert_eq!(head.summary(), "task 117    HTTP Head (deprecated) -> 118");

        assert_eq!(code_rows(&registry, None).len(), registry.len());
    }
}
