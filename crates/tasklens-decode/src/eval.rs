//! Template evaluation: turn an extracted value into display text.

use smol_str::SmolStr;
use tracing::warn;

use crate::extract::ArgumentValue;
use crate::tables::LookupTables;

/// String booleans use this marker for "on".
const TRUE_MARKER: &str = "true";

/// How one slot's value becomes display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalSpec {
    /// `prefix + value`.
    Literal(SmolStr),
    /// `on_text` when the value is `1` (or `true`), nothing otherwise.
    Flag(SmolStr),
    /// `title + text` of the first pair whose digit equals the value.
    PairMatch {
        /// Prepended to the matched text.
        title: SmolStr,
        /// `(digit, text)` pairs scanned in order.
        pairs: Vec<(SmolStr, SmolStr)>,
    },
    /// `prefix + tables[table][value]`.
    TableLookup {
        /// Lookup table id.
        table: SmolStr,
        /// Prepended to the looked-up text.
        prefix: SmolStr,
    },
}

impl EvalSpec {
    /// Literal template with no prefix.
    #[must_use]
    pub fn bare() -> Self {
        Self::Literal(SmolStr::default())
    }
}

/// Result of evaluating one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Nothing to show.
    Empty,
    /// Normal display text.
    Text(String),
    /// Unresolved reference, shown inline instead of failing the record.
    Diagnostic(String),
}

impl Fragment {
    /// Whether nothing is shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) | Self::Diagnostic(text) => text.is_empty(),
        }
    }

    /// Display text, diagnostics included.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) | Self::Diagnostic(text) => text,
        }
    }
}

/// Render a value through its template.
#[must_use]
pub fn render(value: &ArgumentValue, spec: &EvalSpec, tables: &LookupTables) -> String {
    evaluate(value, spec, tables).into_string()
}

/// Render a value through its template, keeping diagnostics distinguishable.
#[must_use]
pub fn evaluate(value: &ArgumentValue, spec: &EvalSpec, tables: &LookupTables) -> Fragment {
    if value.is_empty() {
        return Fragment::Empty;
    }
    match spec {
        EvalSpec::Literal(prefix) => Fragment::Text(format!("{prefix}{}", value.display_text())),
        EvalSpec::Flag(on_text) => evaluate_flag(value, on_text),
        EvalSpec::PairMatch { title, pairs } => {
            if let Some(variable) = value.variable_ref() {
                return Fragment::Text(format!("{title}{variable}"));
            }
            let text = value.display_text();
            let needle = text.trim();
            pairs
                .iter()
                .find(|(digit, _)| digit.as_str() == needle)
                .map_or(Fragment::Empty, |(_, matched)| {
                    Fragment::Text(format!("{title}{matched}"))
                })
        }
        EvalSpec::TableLookup { table, prefix } => evaluate_lookup(value, table, prefix, tables),
    }
}

fn evaluate_flag(value: &ArgumentValue, on_text: &str) -> Fragment {
    if let Some(variable) = value.variable_ref() {
        return Fragment::Text(format!("{on_text}: {variable}"));
    }
    let is_on = match value {
        ArgumentValue::IntValue { raw, .. } => raw.trim() == "1",
        ArgumentValue::StringValue(text) => {
            let text = text.trim();
            text == "1" || text.eq_ignore_ascii_case(TRUE_MARKER)
        }
        _ => false,
    };
    if is_on {
        Fragment::Text(on_text.to_string())
    } else {
        Fragment::Empty
    }
}

fn evaluate_lookup(
    value: &ArgumentValue,
    table: &str,
    prefix: &str,
    tables: &LookupTables,
) -> Fragment {
    if let Some(variable) = value.variable_ref() {
        return Fragment::Text(format!("{prefix}{variable}"));
    }
    let Some(values) = tables.get(table) else {
        warn!(table, "lookup table not found");
        return Fragment::Diagnostic(format!("{prefix}[unknown table {table}]"));
    };
    let Some(index) = value.as_int() else {
        let raw = value.display_text();
        warn!(table, value = raw.as_str(), "lookup index is not an integer");
        return Fragment::Diagnostic(format!("{prefix}[unresolved {table}: '{raw}']"));
    };
    match tables.lookup(table, index) {
        Some(text) => Fragment::Text(format!("{prefix}{text}")),
        None => {
            warn!(
                table,
                index,
                size = values.len(),
                "lookup index out of range"
            );
            Fragment::Diagnostic(format!("{prefix}[unresolved {table}[{index}]]"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(raw: &str) -> ArgumentValue {
        ArgumentValue::IntValue {
            raw: raw.to_string(),
            is_variable_ref: false,
        }
    }

    fn lookup(table: &str, prefix: &str) -> EvalSpec {
        EvalSpec::TableLookup {
            table: table.into(),
            prefix: prefix.into(),
        }
    }

    #[test]
    fn table_lookup_resolves_builtin_values() {
        let tables = LookupTables::builtin();
        assert_eq!(render(&int("2"), &lookup("175", ""), &tables), "Toggle");
        assert_eq!(
            render(&int("3"), &lookup("905", "Mode:"), &tables),
            "Mode:High Accuracy"
        );
    }

    #[test]
    fn table_lookup_degrades_to_diagnostics() {
        let tables = LookupTables::builtin();
        assert_eq!(
            evaluate(&int("7"), &lookup("905", ""), &tables),
            Fragment::Diagnostic("[unresolved 905[7]]".into())
        );
        assert_eq!(
            evaluate(&int("0"), &lookup("nope", "Set:"), &tables),
            Fragment::Diagnostic("Set:[unknown table nope]".into())
        );
        let variable = ArgumentValue::IntValue {
            raw: "%mode".into(),
            is_variable_ref: true,
        };
        assert_eq!(render(&variable, &lookup("905", "Mode:"), &tables), "Mode:%mode");
    }

    #[test]
    fn flag_only_fires_on_one_or_true() {
        let tables = LookupTables::builtin();
        let spec = EvalSpec::Flag("Append".into());
        assert_eq!(render(&int("1"), &spec, &tables), "Append");
        assert_eq!(render(&int("0"), &spec, &tables), "");
        assert_eq!(
            render(&ArgumentValue::StringValue("true".into()), &spec, &tables),
            "Append"
        );
        assert_eq!(render(&ArgumentValue::Empty, &spec, &tables), "");
    }

    #[test]
    fn pair_match_defaults_to_empty() {
        let tables = LookupTables::builtin();
        let spec = EvalSpec::PairMatch {
            title: "Type:".into(),
            pairs: vec![
                ("0".into(), "Action Number".into()),
                ("1".into(), "Action Label".into()),
            ],
        };
        assert_eq!(render(&int("1"), &spec, &tables), "Type:Action Label");
        assert_eq!(render(&int("9"), &spec, &tables), "");
    }

    #[test]
    fn pair_match_shows_variable_references() {
        let tables = LookupTables::builtin();
        let spec = EvalSpec::PairMatch {
            title: "Type:".into(),
            pairs: vec![("0".into(), "Action Number".into())],
        };
        let variable = ArgumentValue::IntValue {
            raw: "%type".into(),
            is_variable_ref: true,
        };
        assert_eq!(render(&variable, &spec, &tables), "Type:%type");
    }

    #[test]
    fn literal_skips_empty_values() {
        let tables = LookupTables::builtin();
        let spec = EvalSpec::Literal("Name:".into());
        assert_eq!(
            render(&ArgumentValue::StringValue("%x".into()), &spec, &tables),
            "Name:%x"
        );
        assert_eq!(render(&ArgumentValue::Empty, &spec, &tables), "");
    }
}
