//! Condition and connector evaluation for `ConditionList` sub-structures.

use std::fmt;

use roxmltree::Node;
use tracing::warn;

use crate::markup::strip_markup;
use crate::xml::{child_text, is_element_named};

/// Rendered in place of an operator that is missing or not recognized.
pub const PLACEHOLDER_OPERATOR: &str = "?";

/// Comparison operators a condition can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSymbol {
    /// `=`
    Eq,
    /// `NEQ`
    Neq,
    /// `~` (wildcard match)
    Matches,
    /// `!~`
    NotMatches,
    /// `~R` (regex match)
    MatchesRegex,
    /// `!~R`
    NotMatchesRegex,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// Variable has a value.
    IsSet,
    /// Variable has no value.
    NotSet,
}

impl OperatorSymbol {
    /// Map the operator code stored in `<op>`.
    ///
    /// Codes 8 and 9 are the maths variants of equal and not-equal and
    /// collapse onto the textual ones.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "0" | "8" => Some(Self::Eq),
            "1" | "9" => Some(Self::Neq),
            "2" => Some(Self::Matches),
            "3" => Some(Self::NotMatches),
            "4" => Some(Self::MatchesRegex),
            "5" => Some(Self::NotMatchesRegex),
            "6" => Some(Self::Lt),
            "7" => Some(Self::Gt),
            "12" => Some(Self::IsSet),
            "13" => Some(Self::NotSet),
            _ => None,
        }
    }

    /// Display form used when rendering a condition.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "NEQ",
            Self::Matches => "~",
            Self::NotMatches => "!~",
            Self::MatchesRegex => "~R",
            Self::NotMatchesRegex => "!~R",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::IsSet => "Is Set",
            Self::NotSet => "Not Set",
        }
    }

    /// Whether the operator compares against a right operand.
    #[must_use]
    pub fn takes_rhs(self) -> bool {
        !matches!(self, Self::IsSet | Self::NotSet)
    }
}

/// Boolean joiner between two conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// Both sides must hold.
    And,
    /// Either side holds.
    Or,
    /// Exactly one side holds.
    Xor,
}

impl Connector {
    /// Parse the text of a `boolN` element.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "and" | "0" => Some(Self::And),
            "or" | "1" => Some(Self::Or),
            "xor" | "2" => Some(Self::Xor),
            _ => None,
        }
    }

    /// Display form used when joining conditions.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
        }
    }
}

/// One normalized comparison. `rhs` is `None` for set/not-set operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Left operand.
    pub lhs: String,
    /// Operator, `None` when the record's operator was missing or unknown.
    pub operator: Option<OperatorSymbol>,
    /// Right operand.
    pub rhs: Option<String>,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self
            .operator
            .map_or(PLACEHOLDER_OPERATOR, OperatorSymbol::symbol);
        write!(f, "{} {}", self.lhs, symbol)?;
        if let Some(rhs) = &self.rhs {
            write!(f, " {rhs}")?;
        }
        Ok(())
    }
}

/// Conditions and the connectors between them, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionExpr {
    /// The comparisons.
    pub conditions: Vec<Condition>,
    /// `connectors[i]` joins `conditions[i]` and `conditions[i + 1]`.
    pub connectors: Vec<Connector>,
}

impl ConditionExpr {
    /// Whether the expression has no conditions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl fmt::Display for ConditionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, condition) in self.conditions.iter().enumerate() {
            if index > 0 {
                let connector = self
                    .connectors
                    .get(index - 1)
                    .copied()
                    .unwrap_or(Connector::And);
                write!(f, " {} ", connector.keyword())?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

/// Evaluate one `<Condition>` element.
#[must_use]
pub fn evaluate(condition: Node<'_, '_>) -> Condition {
    let lhs = child_text(condition, "lhs").map(strip_markup).unwrap_or_default();
    let op_code = child_text(condition, "op");
    let operator = op_code.and_then(OperatorSymbol::from_code);
    if operator.is_none() {
        warn!(
            op = op_code.unwrap_or(""),
            lhs = lhs.as_str(),
            "condition has no recognizable operator"
        );
    }
    let rhs = match operator {
        Some(op) if !op.takes_rhs() => None,
        _ => child_text(condition, "rhs").map(strip_markup),
    };
    Condition { lhs, operator, rhs }
}

/// Evaluate a `<ConditionList>` element into conditions and connectors.
#[must_use]
pub fn evaluate_list(list: Node<'_, '_>) -> ConditionExpr {
    let mut expr = ConditionExpr::default();
    for child in list.children().filter(Node::is_element) {
        if is_element_named(child, "Condition") {
            expr.conditions.push(evaluate(child));
        } else if child.tag_name().name().starts_with("bool") {
            let text = child.text().unwrap_or("");
            let connector = Connector::parse(text).unwrap_or_else(|| {
                warn!(connector = text, "unknown condition connector, assuming AND");
                Connector::And
            });
            expr.connectors.push(connector);
        }
    }
    expr
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_list(xml: &str) -> ConditionExpr {
        let doc = roxmltree::Document::parse(xml).expect("parse XML");
        evaluate_list(doc.root_element())
    }

    #[test]
    fn joins_conditions_with_connectors_in_order() {
        let expr = parse_list(
            r#"<ConditionList sr="if">
                <Condition sr="c0"><lhs>A</lhs><op>0</op><rhs>1</rhs></Condition>
                <bool0>And</bool0>
                <Condition sr="c1"><lhs>B</lhs><op>2</op><rhs>x*</rhs></Condition>
                <bool1>Or</bool1>
                <Condition sr="c2"><lhs>C</lhs><op>12</op></Condition>
            </ConditionList>"#,
        );
        assert_eq!(expr.conditions.len(), 3);
        assert_eq!(expr.connectors, vec![Connector::And, Connector::Or]);
        assert_eq!(expr.to_string(), "A = 1 AND B ~ x* OR C Is Set");
    }

    #[test]
    fn set_operators_drop_rhs() {
        let expr = parse_list(
            r#"<ConditionList><Condition><lhs>%x</lhs><op>13</op><rhs>ignored</rhs></Condition></ConditionList>"#,
        );
        assert_eq!(expr.conditions[0].rhs, None);
        assert_eq!(expr.to_string(), "%x Not Set");
    }

    #[test]
    fn missing_operator_renders_placeholder() {
        let expr = parse_list(
            r#"<ConditionList><Condition><lhs>%x</lhs><rhs>3</rhs></Condition></ConditionList>"#,
        );
        assert_eq!(expr.conditions[0].operator, None);
        assert_eq!(expr.to_string(), "%x ? 3");
    }
}
