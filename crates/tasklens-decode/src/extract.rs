//! Argument extraction: locate each requested slot by its `sr` identifier and
//! decode the raw value.
//!
//! Matching never relies on document position; the producing application does
//! not guarantee child order. A missing slot yields [`ArgumentValue::Empty`].

use roxmltree::Node;
use smol_str::SmolStr;

use crate::condition::{evaluate_list, ConditionExpr};
use crate::markup::{strip_bundle_noise, strip_markup};
use crate::registry::ArgType;
use crate::xml::{child_named, child_text, is_element_named, positional_id, text_content};

/// Suffix of the bundle key holding a plugin's human readable description.
const BLURB_SUFFIX: &str = ".BLURB";

/// One decoded argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
    /// Slot absent or carrying no value.
    Empty,
    /// Text with markup already stripped.
    StringValue(String),
    /// Integer literal, or a variable name when `is_variable_ref` is set.
    IntValue {
        /// Literal digits or variable name.
        raw: String,
        /// Value came from a nested variable reference.
        is_variable_ref: bool,
    },
    /// Application reference.
    AppRef {
        /// Activity class.
        class: String,
        /// Package name.
        pkg: String,
        /// User-visible label.
        label: String,
    },
    /// Image reference.
    ImageRef {
        /// Resource/file name, or a variable name.
        name: String,
        /// Owning package, if any.
        package: String,
    },
    /// Plugin description text.
    BundleText(String),
    /// Parsed condition list.
    ConditionExpr(ConditionExpr),
}

impl ArgumentValue {
    /// Whether the value renders as nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::StringValue(text) | Self::BundleText(text) => text.is_empty(),
            Self::IntValue { raw, .. } => raw.is_empty(),
            Self::AppRef { class, pkg, label } => {
                class.is_empty() && pkg.is_empty() && label.is_empty()
            }
            Self::ImageRef { name, package } => name.is_empty() && package.is_empty(),
            Self::ConditionExpr(expr) => expr.is_empty(),
        }
    }

    /// Plain display text for the value.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::StringValue(text) | Self::BundleText(text) => text.clone(),
            Self::IntValue { raw, .. } => raw.clone(),
            Self::AppRef { class, pkg, label } => {
                let name = [label, pkg, class]
                    .into_iter()
                    .find(|part| !part.is_empty())
                    .cloned()
                    .unwrap_or_default();
                if !label.is_empty() && !pkg.is_empty() {
                    format!("{name} ({pkg})")
                } else {
                    name
                }
            }
            Self::ImageRef { name, package } => match (name.is_empty(), package.is_empty()) {
                (false, false) => format!("{name} ({package})"),
                (false, true) => name.clone(),
                (true, _) => package.clone(),
            },
            Self::ConditionExpr(expr) => expr.to_string(),
        }
    }

    /// Integer view: literal digits parse, variable references do not.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::IntValue {
                raw,
                is_variable_ref: false,
            } => raw.trim().parse().ok(),
            Self::StringValue(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Variable name for values that are variable references.
    #[must_use]
    pub fn variable_ref(&self) -> Option<&str> {
        match self {
            Self::IntValue {
                raw,
                is_variable_ref: true,
            } => Some(raw),
            _ => None,
        }
    }
}

/// Extract one value per requested slot, in the requested order.
#[must_use]
pub fn extract(record: Node<'_, '_>, slots: &[(SmolStr, ArgType)]) -> Vec<ArgumentValue> {
    slots
        .iter()
        .map(|(slot, ty)| extract_slot(record, slot, *ty))
        .collect()
}

/// Extract a single slot.
#[must_use]
pub fn extract_slot(record: Node<'_, '_>, slot: &str, ty: ArgType) -> ArgumentValue {
    let Some(node) = find_slot(record, slot, ty) else {
        return ArgumentValue::Empty;
    };
    match ty {
        ArgType::Int => extract_int(node),
        ArgType::Str => {
            let text = strip_markup(&text_content(node));
            if text.is_empty() {
                ArgumentValue::Empty
            } else {
                ArgumentValue::StringValue(text)
            }
        }
        ArgType::App => ArgumentValue::AppRef {
            class: owned_child_text(node, "appClass"),
            pkg: owned_child_text(node, "appPkg"),
            label: owned_child_text(node, "label"),
        },
        ArgType::Img => {
            let name = child_text(node, "nme")
                .or_else(|| child_text(node, "var"))
                .map(str::trim)
                .unwrap_or_default()
                .to_string();
            ArgumentValue::ImageRef {
                name,
                package: owned_child_text(node, "pkg"),
            }
        }
        ArgType::Bundle => extract_bundle(node),
        ArgType::ConditionList => ArgumentValue::ConditionExpr(evaluate_list(node)),
    }
}

fn find_slot<'a, 'input>(
    record: Node<'a, 'input>,
    slot: &str,
    ty: ArgType,
) -> Option<Node<'a, 'input>> {
    record
        .children()
        .find(|child| is_element_named(*child, ty.tag()) && positional_id(*child) == Some(slot))
}

fn extract_int(node: Node<'_, '_>) -> ArgumentValue {
    if let Some(value) = node.attribute("val").map(str::trim) {
        if !value.is_empty() {
            return ArgumentValue::IntValue {
                raw: value.to_string(),
                is_variable_ref: false,
            };
        }
    }
    match child_text(node, "var").map(str::trim) {
        Some(variable) if !variable.is_empty() => ArgumentValue::IntValue {
            raw: variable.to_string(),
            is_variable_ref: true,
        },
        _ => ArgumentValue::Empty,
    }
}

fn extract_bundle(node: Node<'_, '_>) -> ArgumentValue {
    let values = child_named(node, "Vals").unwrap_or(node);
    let blurb = values
        .children()
        .find(|child| child.is_element() && child.tag_name().name().ends_with(BLURB_SUFFIX))
        .map(text_content)
        .map(|text| strip_bundle_noise(&text))
        .unwrap_or_default();
    if blurb.is_empty() {
        ArgumentValue::Empty
    } else {
        ArgumentValue::BundleText(blurb)
    }
}

fn owned_child_text(node: Node<'_, '_>, name: &str) -> String {
    child_text(node, name)
        .map(|text| strip_markup(text.trim()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(items: &[(&str, ArgType)]) -> Vec<(SmolStr, ArgType)> {
        items
            .iter()
            .map(|(slot, ty)| (SmolStr::new(slot), *ty))
            .collect()
    }

    #[test]
    fn matches_by_identifier_not_position() {
        let doc = roxmltree::Document::parse(
            r#"<Action sr="act0">
                <code>547</code>
                <Int sr="arg2" val="1"/>
                <Str sr="arg1" ve="3">world</Str>
                <Str sr="arg0" ve="3">%greeting</Str>
            </Action>"#,
        )
        .expect("parse XML");
        let values = extract(
            doc.root_element(),
            &slots(&[
                ("arg0", ArgType::Str),
                ("arg1", ArgType::Str),
                ("arg2", ArgType::Int),
            ]),
        );
        assert_eq!(
            values,
            vec![
                ArgumentValue::StringValue("%greeting".into()),
                ArgumentValue::StringValue("world".into()),
                ArgumentValue::IntValue {
                    raw: "1".into(),
                    is_variable_ref: false
                },
            ]
        );
    }

    #[test]
    fn int_falls_back_to_variable_then_empty() {
        let doc = roxmltree::Document::parse(
            r#"<Action><Int sr="arg0"><var>%level</var></Int><Int sr="arg1"/></Action>"#,
        )
        .expect("parse XML");
        let record = doc.root_element();
        assert_eq!(
            extract_slot(record, "arg0", ArgType::Int),
            ArgumentValue::IntValue {
                raw: "%level".into(),
                is_variable_ref: true
            }
        );
        assert_eq!(extract_slot(record, "arg1", ArgType::Int), ArgumentValue::Empty);
        assert_eq!(extract_slot(record, "arg9", ArgType::Int), ArgumentValue::Empty);
    }

    #[test]
    fn app_and_image_tolerate_missing_parts() {
        let doc = roxmltree::Document::parse(
            r#"<Action>
                <App sr="arg0"><appPkg>com.example.mail</appPkg><label>Mail</label></App>
                <Img sr="arg1"><nme>ic_alarm</nme></Img>
            </Action>"#,
        )
        .expect("parse XML");
        let record = doc.root_element();
        let app = extract_slot(record, "arg0", ArgType::App);
        assert_eq!(app.display_text(), "Mail (com.example.mail)");
        let image = extract_slot(record, "arg1", ArgType::Img);
        assert_eq!(image.display_text(), "ic_alarm");
    }

    #[test]
    fn bundle_blurb_is_cleaned() {
        let doc = roxmltree::Document::parse(
            r#"<Action>
                <Bundle sr="arg0"><Vals sr="val">
                    <com.twofortyfouram.locale.intent.extra.BLURB>&lt;b&gt;Mode&lt;/b&gt;: Silent &lt;null&gt;</com.twofortyfouram.locale.intent.extra.BLURB>
                    <com.twofortyfouram.locale.intent.extra.BLURB-type>java.lang.String</com.twofortyfouram.locale.intent.extra.BLURB-type>
                </Vals></Bundle>
            </Action>"#,
        )
        .expect("parse XML");
        let value = extract_slot(doc.root_element(), "arg0", ArgType::Bundle);
        assert_eq!(value, ArgumentValue::BundleText("Mode: Silent".into()));
    }
}
