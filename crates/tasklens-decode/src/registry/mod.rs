//! Code registry: `(code, kind)` to decoding schema.
//!
//! Static entries come from the declarative tables in [`task`], [`state`] and
//! [`event`] and are validated once when the registry is built. Records seen at
//! runtime can widen an entry's argument shape (see
//! [`Registry::register_or_upgrade`]); shapes only ever grow.

mod event;
pub(crate) mod raw;
mod state;
mod task;

use std::fmt;

use indexmap::IndexMap;
use roxmltree::Node;
use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::error::SchemaError;
use crate::eval::EvalSpec;
use crate::tables::LookupTables;
use crate::xml::{positional_id, positional_index};

use raw::RawEntry;

/// Record children that never count as argument slots during inference.
pub const DEFAULT_IGNORED_TAGS: &[&str] = &["code", "label", "on", "se", "pin", "ConditionList"];

/// Codes whose display name carries a deprecation annotation.
const RETIRED_CODES: &[(RecordKind, &str)] = &[
    (RecordKind::Task, "116"),
    (RecordKind::Task, "117"),
    (RecordKind::Task, "118"),
    (RecordKind::Task, "325"),
    (RecordKind::State, "150"),
];

/// Bound on redirect chains; a longer chain is treated as a cycle.
const MAX_REDIRECT_HOPS: usize = 4;

/// Which family a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    /// Task action.
    Task,
    /// Profile state condition.
    State,
    /// Profile event condition.
    Event,
}

impl RecordKind {
    /// All kinds, in registry order.
    pub const ALL: [RecordKind; 3] = [Self::Task, Self::State, Self::Event];

    /// Element tag the record uses in the backup document.
    #[must_use]
    pub fn element_tag(self) -> &'static str {
        match self {
            Self::Task => "Action",
            Self::State => "State",
            Self::Event => "Event",
        }
    }

    /// Noun used in user-facing text.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Task => "action",
            Self::State => "state",
            Self::Event => "event",
        }
    }

    /// Parse a kind name (`task`/`action`, `state`, `event`).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "task" | "action" => Some(Self::Task),
            "state" => Some(Self::State),
            "event" => Some(Self::Event),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Task => "task",
            Self::State => "state",
            Self::Event => "event",
        })
    }
}

/// Identity of a record's meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeKey {
    /// Record kind.
    pub kind: RecordKind,
    /// Numeric code, kept as text.
    pub code: SmolStr,
}

impl CodeKey {
    /// Build a key; surrounding whitespace in `code` is dropped.
    #[must_use]
    pub fn new(code: impl AsRef<str>, kind: RecordKind) -> Self {
        Self {
            kind,
            code: SmolStr::new(code.as_ref().trim()),
        }
    }
}

impl fmt::Display for CodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} code {}", self.kind, self.code)
    }
}

/// Argument slot type, named after the element tag that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
    /// `<Str>`
    Str,
    /// `<Int>`
    Int,
    /// `<App>`
    App,
    /// `<Bundle>`
    Bundle,
    /// `<Img>`
    Img,
    /// `<ConditionList>`
    ConditionList,
}

impl ArgType {
    /// Element tag for the slot type.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Str => "Str",
            Self::Int => "Int",
            Self::App => "App",
            Self::Bundle => "Bundle",
            Self::Img => "Img",
            Self::ConditionList => "ConditionList",
        }
    }

    /// Slot type for an element tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Str" => Some(Self::Str),
            "Int" => Some(Self::Int),
            "App" => Some(Self::App),
            "Bundle" => Some(Self::Bundle),
            "Img" => Some(Self::Img),
            "ConditionList" => Some(Self::ConditionList),
            _ => None,
        }
    }
}

/// Decoding recipe for one code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    /// Name shown in the report.
    pub display_name: SmolStr,
    /// Slot identifiers (`arg0`, `arg1`, `if`, ...), in display order.
    pub arg_slots: Vec<SmolStr>,
    /// Slot types, parallel to `arg_slots`.
    pub arg_types: Vec<ArgType>,
    /// Templates, parallel to `arg_slots`.
    pub eval_templates: Vec<EvalSpec>,
    /// Borrow slots and templates from another code.
    pub redirect: Option<CodeKey>,
    /// Built from an observed record rather than the static tables.
    pub inferred: bool,
}

impl SchemaEntry {
    /// Number of argument slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.arg_slots.len()
    }

    /// `(slot, type)` pairs in display order.
    #[must_use]
    pub fn slots(&self) -> Vec<(SmolStr, ArgType)> {
        self.arg_slots
            .iter()
            .cloned()
            .zip(self.arg_types.iter().copied())
            .collect()
    }

    /// Number of slots other than `ConditionList` ones.
    #[must_use]
    pub fn argument_slot_count(&self) -> usize {
        self.arg_types
            .iter()
            .filter(|ty| **ty != ArgType::ConditionList)
            .count()
    }

    /// Whether the entry declares a `ConditionList` as its own argument.
    #[must_use]
    pub fn has_condition_slot(&self) -> bool {
        self.arg_types.contains(&ArgType::ConditionList)
    }

    fn template_for(&self, slot: &str, ty: ArgType) -> Option<&EvalSpec> {
        self.arg_slots
            .iter()
            .zip(&self.arg_types)
            .zip(&self.eval_templates)
            .find(|((existing, existing_ty), _)| existing.as_str() == slot && **existing_ty == ty)
            .map(|(_, template)| template)
    }
}

/// Outcome of [`Registry::register_or_upgrade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Key was unknown; an inferred entry was added.
    Inserted {
        /// Slots in the inferred entry.
        slots: usize,
    },
    /// Existing entry was replaced by a wider shape. Counts exclude
    /// `ConditionList` slots.
    Upgraded {
        /// Argument slots the entry rendered with before.
        from: usize,
        /// Argument slots of the observed shape.
        to: usize,
    },
    /// Existing entry already had at least as many slots.
    Kept,
}

/// The code registry for one run.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<CodeKey, SchemaEntry>,
}

impl Registry {
    /// Registry with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding every static entry, validated against `tables`.
    pub fn builtin(tables: &LookupTables) -> Result<Self, SchemaError> {
        let registry = Self::from_raw(&[
            (RecordKind::Task, task::ENTRIES),
            (RecordKind::State, state::ENTRIES),
            (RecordKind::Event, event::ENTRIES),
        ])?;
        registry.validate(tables)?;
        debug!(
            entries = registry.len(),
            tables = tables.len(),
            "loaded static code registry"
        );
        Ok(registry)
    }

    pub(crate) fn from_raw(groups: &[(RecordKind, &[RawEntry])]) -> Result<Self, SchemaError> {
        let mut registry = Self::empty();
        for &(kind, entries) in groups {
            for raw in entries {
                let key = CodeKey::new(raw.code, kind);
                let entry = raw.to_entry(kind)?;
                if registry.entries.insert(key.clone(), entry).is_some() {
                    return Err(SchemaError::DuplicateCode {
                        kind,
                        code: key.code,
                    });
                }
            }
        }
        Ok(registry)
    }

    /// Insert or replace an entry directly.
    pub fn insert(&mut self, key: CodeKey, entry: SchemaEntry) -> Option<SchemaEntry> {
        self.entries.insert(key, entry)
    }

    /// Pure read.
    #[must_use]
    pub fn lookup(&self, key: &CodeKey) -> Option<&SchemaEntry> {
        self.entries.get(key)
    }

    /// Number of entries across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one kind, in declaration order.
    pub fn entries(&self, kind: RecordKind) -> impl Iterator<Item = (&CodeKey, &SchemaEntry)> {
        self.entries.iter().filter(move |(key, _)| key.kind == kind)
    }

    /// Whether the code is retired.
    #[must_use]
    pub fn is_deprecated(&self, key: &CodeKey) -> bool {
        RETIRED_CODES
            .iter()
            .any(|(kind, code)| *kind == key.kind && *code == key.code)
    }

    /// The entry whose slots and templates are used to render `entry`:
    /// the redirect target when one is set, otherwise `entry` itself.
    #[must_use]
    pub fn resolve_shape<'a>(&'a self, entry: &'a SchemaEntry) -> &'a SchemaEntry {
        let mut current = entry;
        for _ in 0..MAX_REDIRECT_HOPS {
            let Some(target) = &current.redirect else {
                return current;
            };
            match self.entries.get(target) {
                Some(next) => current = next,
                None => {
                    warn!("redirect target {target} is missing");
                    return current;
                }
            }
        }
        warn!(
            "redirect chain from '{}' is too long, using its own shape",
            entry.display_name
        );
        entry
    }

    /// Observe a record and widen the registry's view of its code.
    ///
    /// Children that carry an `sr` attribute and are not listed in
    /// `ignored_tags` become slots, stable-sorted by the numeric suffix of
    /// `sr`. An unknown key gets an inferred entry; a known key is replaced
    /// only when the observed shape has strictly more argument slots than the
    /// shape it currently renders with. Declared `ConditionList` slots carry
    /// over into the replacement.
    pub fn register_or_upgrade(
        &mut self,
        key: CodeKey,
        record: Node<'_, '_>,
        ignored_tags: &[&str],
    ) -> Registration {
        let observed = infer_slots(record, ignored_tags);
        let Some(existing) = self.entries.get(&key) else {
            debug!(
                "inferred {key} with {} slot(s) from an unmapped record",
                observed.len()
            );
            let slots = observed.len();
            self.entries.insert(key.clone(), inferred_entry(&key, observed));
            return Registration::Inserted { slots };
        };

        let current = self.resolve_shape(existing);
        let from = current.argument_slot_count();
        let to = observed
            .iter()
            .filter(|(_, ty)| *ty != ArgType::ConditionList)
            .count();
        if to <= from {
            return Registration::Kept;
        }

        // Declared condition slots are never observed as arguments; keep them.
        let mut slots = observed;
        for (slot, ty) in current.slots() {
            if ty == ArgType::ConditionList && !slots.iter().any(|(seen, _)| *seen == slot) {
                slots.push((slot, ty));
            }
        }
        let eval_templates = slots
            .iter()
            .map(|(slot, ty)| {
                current
                    .template_for(slot, *ty)
                    .cloned()
                    .unwrap_or_else(|| inferred_template(slot, *ty))
            })
            .collect();
        let upgraded = SchemaEntry {
            display_name: existing.display_name.clone(),
            arg_slots: slots.iter().map(|(slot, _)| slot.clone()).collect(),
            arg_types: slots.iter().map(|(_, ty)| *ty).collect(),
            eval_templates,
            redirect: None,
            inferred: existing.inferred,
        };
        debug!("upgraded {key} from {from} to {to} slot(s)");
        self.entries.insert(key, upgraded);
        Registration::Upgraded { from, to }
    }

    /// Check every static entry; the first failure is returned.
    pub fn validate(&self, tables: &LookupTables) -> Result<(), SchemaError> {
        match self.validation_errors(tables).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every validation failure across static entries.
    #[must_use]
    pub fn validation_errors(&self, tables: &LookupTables) -> Vec<SchemaError> {
        let mut errors = Vec::new();
        for (key, entry) in self.entries.iter().filter(|(_, entry)| !entry.inferred) {
            validate_entry(self, key, entry, tables, &mut errors);
        }
        errors
    }
}

fn validate_entry(
    registry: &Registry,
    key: &CodeKey,
    entry: &SchemaEntry,
    tables: &LookupTables,
    errors: &mut Vec<SchemaError>,
) {
    let kind = key.kind;
    if entry.display_name.trim().is_empty() {
        errors.push(SchemaError::MissingDisplayName {
            kind,
            code: key.code.clone(),
        });
    }
    if let Some(target) = &entry.redirect {
        if registry.lookup(target).is_none() {
            errors.push(SchemaError::DanglingRedirect {
                kind,
                code: key.code.clone(),
                target: target.code.clone(),
            });
        }
    }
    let slots = entry.arg_slots.len();
    if entry.arg_types.len() != slots || entry.eval_templates.len() != slots {
        errors.push(SchemaError::TemplateArity {
            kind,
            code: key.code.clone(),
            slots,
            templates: entry.eval_templates.len().min(entry.arg_types.len()),
        });
        return;
    }
    for ((slot, ty), template) in entry
        .arg_slots
        .iter()
        .zip(&entry.arg_types)
        .zip(&entry.eval_templates)
    {
        match template {
            EvalSpec::TableLookup { table, .. } if !tables.contains(table) => {
                errors.push(SchemaError::UnknownTable {
                    kind,
                    code: key.code.clone(),
                    slot: slot.clone(),
                    table: table.clone(),
                });
            }
            EvalSpec::PairMatch { pairs, .. } if pairs.is_empty() => {
                errors.push(SchemaError::EmptyPairs {
                    kind,
                    code: key.code.clone(),
                    slot: slot.clone(),
                });
            }
            EvalSpec::Literal(prefix) if *ty == ArgType::Int && prefix.is_empty() => {
                errors.push(SchemaError::MissingTemplate {
                    kind,
                    code: key.code.clone(),
                    slot: slot.clone(),
                });
            }
            _ => {}
        }
    }
}

fn infer_slots(record: Node<'_, '_>, ignored_tags: &[&str]) -> Vec<(SmolStr, ArgType)> {
    let mut children = record
        .children()
        .filter(Node::is_element)
        .filter(|child| !ignored_tags.contains(&child.tag_name().name()))
        .filter_map(|child| {
            let slot = positional_id(child)?;
            let ty = ArgType::from_tag(child.tag_name().name())?;
            Some((SmolStr::new(slot), ty))
        })
        .collect::<Vec<_>>();
    children.sort_by_key(|(slot, _)| positional_index(slot).unwrap_or(u32::MAX));
    children
}

fn inferred_template(slot: &str, ty: ArgType) -> EvalSpec {
    match ty {
        ArgType::Int => EvalSpec::Literal(format!("{slot}=").into()),
        _ => EvalSpec::bare(),
    }
}

fn inferred_entry(key: &CodeKey, slots: Vec<(SmolStr, ArgType)>) -> SchemaEntry {
    let eval_templates = slots
        .iter()
        .map(|(slot, ty)| inferred_template(slot, *ty))
        .collect();
    SchemaEntry {
        display_name: unmapped_name(key).into(),
        arg_slots: slots.iter().map(|(slot, _)| slot.clone()).collect(),
        arg_types: slots.iter().map(|(_, ty)| *ty).collect(),
        eval_templates,
        redirect: None,
        inferred: true,
    }
}

/// Placeholder name for a code with no declared schema.
#[must_use]
pub fn unmapped_name(key: &CodeKey) -> String {
    if key.code.is_empty() {
        format!("Unmapped {} (no code)", key.kind.noun())
    } else {
        format!("Unmapped {} code {}", key.kind.noun(), key.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(xml: &str) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(xml).expect("parse XML")
    }

    #[test]
    fn builtin_registry_loads_and_validates() {
        let tables = LookupTables::builtin();
        let registry = Registry::builtin(&tables).expect("static registry");
        assert!(registry.entries(RecordKind::Task).count() > 50);
        let flash = registry
            .lookup(&CodeKey::new("548", RecordKind::Task))
            .expect("Flash");
        assert_eq!(flash.display_name, "Flash");
    }

    #[test]
    fn inference_sorts_by_suffix_and_skips_ignored_tags() {
        let doc = record(
            r#"<Action sr="act0">
                <code>9999</code>
                <label>x</label>
                <Int sr="arg10" val="1"/>
                <Str sr="arg2">b</Str>
                <Str sr="arg0">a</Str>
                <ConditionList sr="if"/>
            </Action>"#,
        );
        let slots = infer_slots(doc.root_element(), DEFAULT_IGNORED_TAGS);
        let ids = slots.iter().map(|(slot, _)| slot.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["arg0", "arg2", "arg10"]);
    }

    #[test]
    fn upgrade_keeps_name_and_shared_templates() {
        let tables = LookupTables::builtin();
        let mut registry = Registry::builtin(&tables).expect("static registry");
        let key = CodeKey::new("548", RecordKind::Task);
        let before = registry.lookup(&key).expect("Flash").clone();
        let wide = record(
            r#"<Action><code>548</code>
                <Str sr="arg0">hi</Str><Int sr="arg1" val="0"/><Int sr="arg2" val="0"/>
                <Str sr="arg3"/><Int sr="arg4" val="0"/><Int sr="arg5" val="0"/>
                <Int sr="arg6" val="0"/><Int sr="arg7" val="0"/></Action>"#,
        );
        let outcome =
            registry.register_or_upgrade(key.clone(), wide.root_element(), DEFAULT_IGNORED_TAGS);
        assert!(matches!(outcome, Registration::Upgraded { to: 8, .. }));
        let after = registry.lookup(&key).expect("Flash");
        assert_eq!(after.display_name, "Flash");
        assert_eq!(after.eval_templates[0], before.eval_templates[0]);
        assert_eq!(after.eval_templates[7], EvalSpec::Literal("arg7=".into()));
    }

    #[test]
    fn redirect_resolves_to_target_shape() {
        let tables = LookupTables::builtin();
        let registry = Registry::builtin(&tables).expect("static registry");
        let subtract = registry
            .lookup(&CodeKey::new("890", RecordKind::Task))
            .expect("Variable Subtract");
        let shape = registry.resolve_shape(subtract);
        assert_eq!(shape.display_name, "Variable Add");
        assert!(shape.slot_count() > 0);
    }

    #[test]
    fn load_time_faults_are_typed_errors() {
        use raw::RawSpec::{Pairs, Plain, Table};
        use raw::{i, s};

        const DUPLICATE: &[RawEntry] = &[
            RawEntry::new("1", "One", &[]),
            RawEntry::new("1", "Again", &[]),
        ];
        const UNTEMPLATED: &[RawEntry] = &[RawEntry::new("2", "Two", &[i("arg0", Plain)])];
        const FAULTY: &[RawEntry] = &[
            RawEntry::new("3", "", &[s("arg0", Plain)]),
            RawEntry::new("4", "Four", &[i("arg0", Table("missing", ""))]),
            RawEntry::new("5", "Five", &[i("arg0", Pairs("T:", &[]))]),
            RawEntry::alias("6", "Six", "404"),
        ];

        assert_eq!(
            Registry::from_raw(&[(RecordKind::Task, DUPLICATE)]).unwrap_err(),
            SchemaError::DuplicateCode {
                kind: RecordKind::Task,
                code: "1".into()
            }
        );
        assert!(matches!(
            Registry::from_raw(&[(RecordKind::Task, UNTEMPLATED)]),
            Err(SchemaError::MissingTemplate { .. })
        ));

        let tables = LookupTables::builtin();
        let registry =
            Registry::from_raw(&[(RecordKind::State, FAULTY)]).expect("rows convert");
        let errors = registry.validation_errors(&tables);
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors[3].to_string(),
            "state code 6: redirect target 404 is not declared"
        );
        assert!(registry.validate(&tables).is_err());
    }

    #[test]
    fn retired_codes_are_flagged() {
        let registry = Registry::empty();
        assert!(registry.is_deprecated(&CodeKey::new("118", RecordKind::Task)));
        assert!(!registry.is_deprecated(&CodeKey::new("118", RecordKind::Event)));
    }
}
