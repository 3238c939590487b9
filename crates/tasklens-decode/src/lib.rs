//! `tasklens-decode` - Action/condition decoding engine for automation backups.
//!
//! Given one record element (an Action, State or Event) this crate resolves
//! its numeric code against a declarative schema table, extracts the typed
//! arguments, interprets them through a small template language and renders a
//! display line. Action lists are rendered with block indentation for
//! `If`/`For`/`Else`/`End` constructs.
//!
//! - **Lookup tables**: static value lists indexed by decoded integers
//! - **Registry**: `(code, kind)` to schema, with runtime shape inference
//! - **Extractor**: slot values by `sr` identifier, never by position
//! - **Evaluator**: `EvalSpec` templates and condition expressions
//! - **Renderer**: canonical ordering, indentation, continuation lines
//!
//! # Example
//!
//! ```
//! use tasklens_decode::{Engine, RecordKind, RenderConfig};
//!
//! let xml = r#"<Action sr="act0"><code>548</code><Str sr="arg0">hello</Str></Action>"#;
//! let doc = roxmltree::Document::parse(xml).unwrap();
//! let engine = Engine::new(RenderConfig::plain()).unwrap();
//! let rendered = engine.decoder().decode(doc.root_element(), RecordKind::Task);
//! assert_eq!(rendered.lines, vec!["Flash: hello".to_string()]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Condition and connector evaluation.
pub mod condition;
/// Render configuration and theme.
pub mod config;
/// Load-time and configuration errors.
pub mod error;
/// `EvalSpec` template evaluation.
pub mod eval;
/// Argument extraction from record elements.
pub mod extract;
/// Inline markup stripping and styling.
pub mod markup;
/// Code registry and static schema data.
pub mod registry;
/// Record rendering and indentation.
pub mod render;
/// Registry shared across threads.
pub mod shared;
/// Static lookup tables.
pub mod tables;
mod xml;

pub use condition::{Condition, ConditionExpr, Connector, OperatorSymbol};
pub use config::{OutputMode, RenderConfig, Theme, ThemeRole};
pub use error::{ConfigError, SchemaError};
pub use eval::EvalSpec;
pub use extract::ArgumentValue;
pub use registry::{ArgType, CodeKey, RecordKind, Registration, Registry, SchemaEntry};
pub use render::{BlockRole, Decoder, Engine, IndentState, LineSink, RenderedRecord};
pub use shared::SharedRegistry;
pub use tables::LookupTables;
