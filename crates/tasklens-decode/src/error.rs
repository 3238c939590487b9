//! Load-time and configuration errors.
//!
//! Per-record problems never surface here: a bad record degrades into visible
//! diagnostic text in the rendered line. These errors only describe packaging
//! faults in the static schema data and invalid render configuration.

#![allow(missing_docs)]

use smol_str::SmolStr;
use thiserror::Error;

use crate::registry::RecordKind;

/// Static schema validation failures. Any of these aborts engine construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Entry declared without a display name.
    #[error("{kind} code {code}: missing display name")]
    MissingDisplayName { kind: RecordKind, code: SmolStr },

    /// Slot that needs an evaluation template has none.
    #[error("{kind} code {code}: slot '{slot}' has no evaluation template")]
    MissingTemplate {
        kind: RecordKind,
        code: SmolStr,
        slot: SmolStr,
    },

    /// Template list length differs from the slot list length.
    #[error("{kind} code {code}: {templates} templates for {slots} slots")]
    TemplateArity {
        kind: RecordKind,
        code: SmolStr,
        slots: usize,
        templates: usize,
    },

    /// Template references a lookup table that does not exist.
    #[error("{kind} code {code}: slot '{slot}' references unknown lookup table '{table}'")]
    UnknownTable {
        kind: RecordKind,
        code: SmolStr,
        slot: SmolStr,
        table: SmolStr,
    },

    /// Pair-match template without any pairs.
    #[error("{kind} code {code}: slot '{slot}' has an empty pair list")]
    EmptyPairs {
        kind: RecordKind,
        code: SmolStr,
        slot: SmolStr,
    },

    /// Redirect points at a code that is not declared.
    #[error("{kind} code {code}: redirect target {target} is not declared")]
    DanglingRedirect {
        kind: RecordKind,
        code: SmolStr,
        target: SmolStr,
    },

    /// The same code was declared twice for one kind.
    #[error("{kind} code {code}: declared more than once")]
    DuplicateCode { kind: RecordKind, code: SmolStr },
}

/// Render configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read {path}: {message}")]
    Read { path: SmolStr, message: SmolStr },

    /// Config file is not valid TOML for the expected layout.
    #[error("invalid config: {0}")]
    Parse(SmolStr),

    /// A value is syntactically valid but not acceptable.
    #[error("invalid config value: {0}")]
    Invalid(SmolStr),
}
