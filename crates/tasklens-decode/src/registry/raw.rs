//! Const-constructible schema rows and their conversion into [`SchemaEntry`].

#![allow(missing_docs)]

use smol_str::SmolStr;

use crate::error::SchemaError;
use crate::eval::EvalSpec;
use crate::registry::{ArgType, CodeKey, RecordKind, SchemaEntry};

/// Template for one slot as written in the data tables.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RawSpec {
    /// No template. Accepted for every slot type except `Int`.
    Plain,
    Lit(&'static str),
    Flag(&'static str),
    Pairs(&'static str, &'static [(&'static str, &'static str)]),
    Table(&'static str, &'static str),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RawArg {
    pub slot: &'static str,
    pub ty: ArgType,
    pub spec: RawSpec,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RawEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub args: &'static [RawArg],
    pub redirect: Option<&'static str>,
}

impl RawEntry {
    pub(crate) const fn new(
        code: &'static str,
        name: &'static str,
        args: &'static [RawArg],
    ) -> Self {
        Self {
            code,
            name,
            args,
            redirect: None,
        }
    }

    /// Entry that borrows the argument shape of `target`.
    pub(crate) const fn alias(
        code: &'static str,
        name: &'static str,
        target: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            args: &[],
            redirect: Some(target),
        }
    }

    pub(crate) fn to_entry(self, kind: RecordKind) -> Result<SchemaEntry, SchemaError> {
        let mut arg_slots = Vec::with_capacity(self.args.len());
        let mut arg_types = Vec::with_capacity(self.args.len());
        let mut eval_templates = Vec::with_capacity(self.args.len());
        for arg in self.args {
            let template = match arg.spec {
                RawSpec::Plain if arg.ty == ArgType::Int => {
                    return Err(SchemaError::MissingTemplate {
                        kind,
                        code: self.code.into(),
                        slot: arg.slot.into(),
                    });
                }
                RawSpec::Plain => EvalSpec::bare(),
                RawSpec::Lit(prefix) => EvalSpec::Literal(prefix.into()),
                RawSpec::Flag(on_text) => EvalSpec::Flag(on_text.into()),
                RawSpec::Pairs(title, pairs) => EvalSpec::PairMatch {
                    title: title.into(),
                    pairs: pairs
                        .iter()
                        .map(|&(digit, text)| (SmolStr::new(digit), SmolStr::new(text)))
                        .collect(),
                },
                RawSpec::Table(table, prefix) => EvalSpec::TableLookup {
                    table: table.into(),
                    prefix: prefix.into(),
                },
            };
            arg_slots.push(SmolStr::new(arg.slot));
            arg_types.push(arg.ty);
            eval_templates.push(template);
        }
        Ok(SchemaEntry {
            display_name: self.name.into(),
            arg_slots,
            arg_types,
            eval_templates,
            redirect: self.redirect.map(|target| CodeKey::new(target, kind)),
            inferred: false,
        })
    }
}

pub(crate) const fn s(slot: &'static str, spec: RawSpec) -> RawArg {
    RawArg {
        slot,
        ty: ArgType::Str,
        spec,
    }
}

pub(crate) const fn i(slot: &'static str, spec: RawSpec) -> RawArg {
    RawArg {
        slot,
        ty: ArgType::Int,
        spec,
    }
}

pub(crate) const fn app(slot: &'static str, spec: RawSpec) -> RawArg {
    RawArg {
        slot,
        ty: ArgType::App,
        spec,
    }
}

pub(crate) const fn img(slot: &'static str, spec: RawSpec) -> RawArg {
    RawArg {
        slot,
        ty: ArgType::Img,
        spec,
    }
}

pub(crate) const fn bundle(slot: &'static str) -> RawArg {
    RawArg {
        slot,
        ty: ArgType::Bundle,
        spec: RawSpec::Plain,
    }
}

/// The `ConditionList` slot of an `If`-style action.
pub(crate) const fn cond(slot: &'static str) -> RawArg {
    RawArg {
        slot,
        ty: ArgType::ConditionList,
        spec: RawSpec::Plain,
    }
}
