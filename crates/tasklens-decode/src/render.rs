//! Record rendering: display line assembly, canonical ordering, block
//! indentation and continuation-line capping.

#![allow(missing_docs)]

use roxmltree::Node;
use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::condition::evaluate_list;
use crate::config::{RenderConfig, ThemeRole};
use crate::error::SchemaError;
use crate::eval::{self, Fragment};
use crate::extract::extract;
use crate::markup::{strip_markup, Styler};
use crate::registry::{
    unmapped_name, CodeKey, RecordKind, Registration, Registry, DEFAULT_IGNORED_TAGS,
};
use crate::tables::LookupTables;
use crate::xml::{child_named, child_text, is_element_named, positional_sort_key};

const DEPRECATED_SUFFIX: &str = " (deprecated)";
const INVERTED_PREFIX: &str = "NOT ";
const ARG_SEPARATOR: &str = ", ";

/// Effect of a rendered record on block depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    /// `If`, `For`: deepen after emitting.
    Opener,
    /// `End If`, `End For`: shallow before emitting.
    Closer,
    /// `Else`: shallow before, deepen after.
    Reopener,
    /// Everything else.
    Neutral,
}

impl BlockRole {
    /// Classify by resolved display name.
    #[must_use]
    pub fn classify(display_name: &str) -> Self {
        match display_name {
            "If" | "For" => Self::Opener,
            "End If" | "End For" => Self::Closer,
            "Else" => Self::Reopener,
            _ => Self::Neutral,
        }
    }
}

/// Block depth for one action list.
#[derive(Debug, Clone)]
pub struct IndentState {
    depth: usize,
    unit: SmolStr,
}

impl IndentState {
    #[must_use]
    pub fn new(unit: impl Into<SmolStr>) -> Self {
        Self {
            depth: 0,
            unit: unit.into(),
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Indentation for the current depth.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.unit.repeat(self.depth)
    }

    /// Apply the pre-emit half of `role`. Depth never drops below zero, so a
    /// stray closer is harmless.
    pub fn enter(&mut self, role: BlockRole) {
        if matches!(role, BlockRole::Closer | BlockRole::Reopener) {
            self.depth = self.depth.saturating_sub(1);
        }
    }

    /// Apply the post-emit half of `role`.
    pub fn leave(&mut self, role: BlockRole) {
        if matches!(role, BlockRole::Opener | BlockRole::Reopener) {
            self.depth += 1;
        }
    }
}

/// Receives rendered lines in order.
pub trait LineSink {
    fn push_line(&mut self, line: String);
}

impl LineSink for Vec<String> {
    fn push_line(&mut self, line: String) {
        self.push(line);
    }
}

/// One decoded record: its primary line, any continuation lines, and its
/// block role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRecord {
    pub lines: Vec<String>,
    pub role: BlockRole,
}

impl RenderedRecord {
    /// The first line.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.lines.first().map_or("", String::as_str)
    }
}

/// Records stable-sorted by the numeric suffix of their `sr` identifier.
#[must_use]
pub fn canonical_order<'a, 'input>(
    records: impl IntoIterator<Item = Node<'a, 'input>>,
) -> Vec<Node<'a, 'input>> {
    let mut records = records.into_iter().collect::<Vec<_>>();
    records.sort_by_key(|record| positional_sort_key(*record));
    records
}

/// Read-only decoder over a registry snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    registry: &'a Registry,
    tables: &'a LookupTables,
    config: &'a RenderConfig,
}

impl<'a> Decoder<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry, tables: &'a LookupTables, config: &'a RenderConfig) -> Self {
        Self {
            registry,
            tables,
            config,
        }
    }

    /// Decode one record. Never fails: unknown codes, bad lookups and
    /// malformed conditions show up as text in the result.
    #[must_use]
    pub fn decode(&self, record: Node<'_, '_>, kind: RecordKind) -> RenderedRecord {
        let styler = Styler::new(self.config);
        let key = record_key(record, kind);

        let (head, role) = match self.registry.lookup(&key) {
            None => {
                warn!("no schema for {key}");
                let name = styler.paint(ThemeRole::Unmapped, &unmapped_name(&key));
                (name, BlockRole::Neutral)
            }
            Some(entry) => {
                let shape = self.registry.resolve_shape(entry);
                let values = extract(record, &shape.slots());
                let args = values
                    .iter()
                    .zip(&shape.eval_templates)
                    .map(|(value, template)| eval::evaluate(value, template, self.tables))
                    .filter(|fragment| !fragment.is_empty())
                    .map(|fragment| match fragment {
                        Fragment::Diagnostic(text) => styler.paint(ThemeRole::Diagnostic, &text),
                        other => styler.paint(ThemeRole::ActionArgs, &other.into_string()),
                    })
                    .collect::<Vec<_>>();

                let mut head = String::new();
                if kind == RecordKind::State && record_flag(record, "pin", "true") {
                    head.push_str(&styler.paint(ThemeRole::Condition, INVERTED_PREFIX));
                }
                if entry.inferred {
                    head.push_str(&styler.paint(ThemeRole::Unmapped, &entry.display_name));
                } else {
                    head.push_str(&styler.strong(ThemeRole::ActionName, &entry.display_name));
                }
                if self.registry.is_deprecated(&key) {
                    head.push_str(&styler.paint(ThemeRole::Deprecated, DEPRECATED_SUFFIX));
                }
                if !args.is_empty() {
                    head.push_str(": ");
                    head.push_str(&args.join(ARG_SEPARATOR));
                }
                if !shape.has_condition_slot() {
                    if let Some(guard) = guard_text(record) {
                        head.push(' ');
                        head.push_str(&styler.paint(ThemeRole::Condition, &guard));
                    }
                }
                let role = match kind {
                    RecordKind::Task => BlockRole::classify(&entry.display_name),
                    RecordKind::State | RecordKind::Event => BlockRole::Neutral,
                };
                (head, role)
            }
        };

        let text = head + &annotations(record, &styler);
        RenderedRecord {
            lines: self.split_continuations(&text, &styler),
            role,
        }
    }

    /// Render `records` in canonical order into `sink`. Task records get block
    /// indentation; the depth is local to this call.
    pub fn render_records<'n, 'input: 'n, S>(
        &self,
        records: impl IntoIterator<Item = Node<'n, 'input>>,
        kind: RecordKind,
        sink: &mut S,
    ) where
        S: LineSink + ?Sized,
    {
        let mut indent = IndentState::new(self.config.indent_unit.clone());
        for record in canonical_order(records) {
            let rendered = self.decode(record, kind);
            if kind != RecordKind::Task {
                rendered.lines.into_iter().for_each(|line| sink.push_line(line));
                continue;
            }
            indent.enter(rendered.role);
            let prefix = indent.prefix();
            for line in rendered.lines {
                sink.push_line(format!("{prefix}{line}"));
            }
            indent.leave(rendered.role);
        }
    }

    /// Render the `Action` children of a `Task` element.
    pub fn render_action_list<S>(&self, task: Node<'_, '_>, sink: &mut S)
    where
        S: LineSink + ?Sized,
    {
        let actions = task
            .children()
            .filter(|child| is_element_named(*child, RecordKind::Task.element_tag()));
        self.render_records(actions, RecordKind::Task, sink);
    }

    fn split_continuations(&self, text: &str, styler: &Styler<'_>) -> Vec<String> {
        let mut parts = text.split('\n');
        let mut lines = vec![parts.next().unwrap_or_default().to_string()];
        let mut rest = parts.collect::<Vec<_>>();
        while rest.last().is_some_and(|line| line.trim().is_empty()) {
            rest.pop();
        }
        let cap = self.config.continuation_cap;
        let marker = self.config.continuation_marker.as_str();
        for line in rest.iter().take(cap) {
            lines.push(format!(
                "{}{line}",
                styler.paint(ThemeRole::Continuation, marker)
            ));
        }
        if rest.len() > cap {
            let hidden = rest.len() - cap;
            debug!(hidden, "continuation lines truncated");
            lines.push(styler.paint(
                ThemeRole::Continuation,
                &format!("{marker}({hidden} more lines not shown)"),
            ));
        }
        lines
    }
}

/// Owns the registry, tables and configuration for one run.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Registry,
    tables: LookupTables,
    config: RenderConfig,
}

impl Engine {
    /// Engine over the built-in tables and registry. Fails only when the
    /// static schema data does not validate.
    pub fn new(config: RenderConfig) -> Result<Self, SchemaError> {
        let tables = LookupTables::builtin();
        let registry = Registry::builtin(&tables)?;
        Ok(Self::from_parts(registry, tables, config))
    }

    #[must_use]
    pub fn from_parts(registry: Registry, tables: LookupTables, config: RenderConfig) -> Self {
        Self {
            registry,
            tables,
            config,
        }
    }

    #[must_use]
    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.registry, &self.tables, &self.config)
    }

    /// Let the registry learn from `record`'s argument shape.
    pub fn observe(&mut self, record: Node<'_, '_>, kind: RecordKind) -> Registration {
        let key = record_key(record, kind);
        self.registry
            .register_or_upgrade(key, record, DEFAULT_IGNORED_TAGS)
    }

    /// Observe every `Action` of a `Task` element.
    pub fn observe_task(&mut self, task: Node<'_, '_>) {
        for action in task
            .children()
            .filter(|child| is_element_named(*child, RecordKind::Task.element_tag()))
        {
            self.observe(action, RecordKind::Task);
        }
    }

    /// Observe, then render, one Task's action list.
    pub fn render_task<S>(&mut self, task: Node<'_, '_>, sink: &mut S)
    where
        S: LineSink + ?Sized,
    {
        self.observe_task(task);
        self.decoder().render_action_list(task, sink);
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    #[must_use]
    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Split into the parts a multi-threaded host needs.
    #[must_use]
    pub fn into_parts(self) -> (Registry, LookupTables, RenderConfig) {
        (self.registry, self.tables, self.config)
    }
}

pub(crate) fn record_key(record: Node<'_, '_>, kind: RecordKind) -> CodeKey {
    CodeKey::new(child_text(record, "code").unwrap_or_default(), kind)
}

fn record_flag(record: Node<'_, '_>, name: &str, expected: &str) -> bool {
    child_text(record, name).is_some_and(|text| text.trim().eq_ignore_ascii_case(expected))
}

fn guard_text(record: Node<'_, '_>) -> Option<String> {
    let list = child_named(record, "ConditionList")?;
    let expr = evaluate_list(list);
    if expr.is_empty() {
        None
    } else {
        Some(format!("(If {expr})"))
    }
}

fn annotations(record: Node<'_, '_>, styler: &Styler<'_>) -> String {
    let mut out = String::new();
    let label = child_text(record, "label")
        .map(|text| strip_markup(text.trim()))
        .unwrap_or_default();
    if !label.is_empty() {
        out.push(' ');
        out.push_str(&styler.paint(ThemeRole::Label, &format!("with label: {label}")));
    }
    if record_flag(record, "se", "false") {
        out.push(' ');
        out.push_str(&styler.paint(ThemeRole::ContinueOnError, "[Continue Task After Error]"));
    }
    if record_flag(record, "on", "false") {
        out.push(' ');
        out.push_str(&styler.paint(ThemeRole::Disabled, "[DISABLED]"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn else_closes_then_reopens() {
        let mut indent = IndentState::new("  ");
        indent.leave(BlockRole::Opener);
        assert_eq!(indent.depth(), 1);
        indent.enter(BlockRole::Reopener);
        assert_eq!(indent.depth(), 0);
        indent.leave(BlockRole::Reopener);
        assert_eq!(indent.prefix(), "  ");
    }

    #[test]
    fn stray_closer_floors_at_zero() {
        let mut indent = IndentState::new("  ");
        indent.enter(BlockRole::Closer);
        indent.enter(BlockRole::Closer);
        assert_eq!(indent.depth(), 0);
    }

    #[test]
    fn classify_matches_whole_names_only() {
        assert_eq!(BlockRole::classify("If"), BlockRole::Opener);
        assert_eq!(BlockRole::classify("End For"), BlockRole::Closer);
        assert_eq!(BlockRole::classify("Else"), BlockRole::Reopener);
        assert_eq!(BlockRole::classify("Iffy"), BlockRole::Neutral);
    }
}
