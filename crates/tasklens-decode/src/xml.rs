//! Small helpers over `roxmltree` nodes.

use roxmltree::Node;

pub(crate) fn is_element_named(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

pub(crate) fn child_named<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_element_named(*child, name))
}

/// Text of the first child element named `name`.
pub(crate) fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child_named(node, name).and_then(|child| child.text())
}

/// Concatenated text of every text descendant, used for mixed-content fields.
pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

pub(crate) fn positional_id<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute("sr")
}

/// Numeric suffix of a positional identifier (`act12` -> 12, `arg0` -> 0).
pub(crate) fn positional_index(id: &str) -> Option<u32> {
    let digits_start = id
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_ascii_digit())
        .last()
        .map(|(index, _)| index)?;
    id[digits_start..].parse().ok()
}

/// Sort key for canonical ordering. Records without a usable suffix sort last
/// and keep their relative document order.
pub(crate) fn positional_sort_key(node: Node<'_, '_>) -> u32 {
    positional_id(node)
        .and_then(positional_index)
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_index_reads_trailing_digits() {
        assert_eq!(positional_index("act12"), Some(12));
        assert_eq!(positional_index("arg0"), Some(0));
        assert_eq!(positional_index("c3"), Some(3));
        assert_eq!(positional_index("if"), None);
        assert_eq!(positional_index(""), None);
    }

    #[test]
    fn text_content_joins_mixed_content() {
        let doc = roxmltree::Document::parse("<Str>a<b>b</b>c</Str>").expect("parse");
        assert_eq!(text_content(doc.root_element()), "abc");
    }
}
