//! Task-list detection.
//!
//! Rich-text sources rarely ship real checkbox elements; a task item usually
//! arrives as literal `[ ]` / `[x]` text at the start of a list item or
//! paragraph. Two passes turn that back into structure:
//!
//! 1. [`materialize_checkboxes`] strips the bracket prefix from the node's
//!    direct leading text and inserts a disabled checkbox `<input>` before it.
//! 2. [`unwrap_checkbox_paragraphs`] splices a lone `<p>` holding such a
//!    checkbox into its `<li>`, so the item renders tight.
//!
//! Only the first child of the `<p>`/`<li>` is inspected, and only when it is
//! a text node. Text deeper in the item (nested lists, later siblings) never
//! matches.

use regex::Regex;
use std::sync::LazyLock;

use super::super::dom::{DomNode, DomTree, ElementData};

/// Bracket checkbox at the very start of a text node.
static CHECKBOX_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[([ xX])\]\s*").expect("CHECKBOX_PREFIX: hardcoded regex is valid")
});

/// A bracket checkbox found at the start of a node's leading text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxMarker {
    pub checked: bool,
    /// Bytes of leading text consumed by the marker, trailing whitespace included.
    pub matched_len: usize,
}

impl CheckboxMarker {
    /// Match `[ ]`, `[x]` or `[X]` at the start of `text`.
    ///
    /// # Examples
    /// ```
    /// # use kodegen_tools_pastedown::markdown_converter::html_preprocessing::CheckboxMarker;
    /// let marker = CheckboxMarker::detect("[x] done").unwrap();
    /// assert!(marker.checked);
    /// assert_eq!(&"[x] done"[marker.matched_len..], "done");
    ///
    /// assert!(CheckboxMarker::detect("see [x] here").is_none());
    /// ```
    pub fn detect(text: &str) -> Option<Self> {
        let caps = CHECKBOX_PREFIX.captures(text)?;
        let whole = caps.get(0)?;
        let mark = caps.get(1)?;
        Some(Self {
            checked: mark.as_str().eq_ignore_ascii_case("x"),
            matched_len: whole.end(),
        })
    }
}

/// Build the disabled checkbox element inserted for a marker.
#[must_use]
pub fn checkbox_element(checked: bool) -> DomNode {
    let mut input = ElementData::new("input")
        .with_attr("type", "checkbox")
        .with_attr("disabled", "");
    if checked {
        input = input.with_attr("checked", "");
    }
    DomNode::Element(input)
}

/// True when the node is a checkbox `<input>`.
pub fn is_checkbox(node: &DomNode) -> bool {
    node.as_element().is_some_and(|el| {
        el.tag == "input"
            && el
                .attr("type")
                .is_some_and(|t| t.eq_ignore_ascii_case("checkbox"))
    })
}

/// Replace bracket prefixes on `<p>`/`<li>` leading text with checkboxes.
///
/// Returns the number of checkboxes inserted.
pub fn materialize_checkboxes(tree: &mut DomTree) -> usize {
    let mut inserted = 0;

    for id in tree.elements_named(&["p", "li"]) {
        let Some(first) = tree.get(id).and_then(|node| node.first_child()) else {
            continue;
        };
        let text_id = first.id();
        let Some(text) = first.value().as_text() else {
            continue;
        };
        let Some(marker) = CheckboxMarker::detect(text) else {
            continue;
        };
        let remainder = text[marker.matched_len..].to_string();

        let Some(mut text_node) = tree.get_mut(text_id) else {
            continue;
        };
        text_node.insert_before(checkbox_element(marker.checked));
        if remainder.is_empty() {
            text_node.detach();
        } else {
            *text_node.value() = DomNode::Text(remainder);
        }
        inserted += 1;
    }

    tracing::debug!("Materialized {} task-list checkboxes", inserted);
    inserted
}

/// Splice `<li><p><input type=checkbox>…</p></li>` into `<li><input>…</li>`.
///
/// Applies only when the paragraph is the item's sole element child and has
/// a checkbox among its direct children. Returns the number of paragraphs
/// unwrapped.
pub fn unwrap_checkbox_paragraphs(tree: &mut DomTree) -> usize {
    let mut unwrapped = 0;

    for li_id in tree.elements_named(&["li"]) {
        let element_children = tree.element_children(li_id);
        let [p_id] = element_children.as_slice() else {
            continue;
        };
        let p_id = *p_id;

        let holds_checkbox = tree.get(p_id).is_some_and(|p| {
            p.value().is_element("p") && p.children().any(|c| is_checkbox(c.value()))
        });
        if !holds_checkbox {
            continue;
        }

        for child_id in tree.children(p_id) {
            if let Some(mut p) = tree.get_mut(p_id) {
                p.insert_id_before(child_id);
            }
        }
        if let Some(mut p) = tree.get_mut(p_id) {
            p.detach();
        }
        unwrapped += 1;
    }

    tracing::debug!("Unwrapped {} checkbox paragraphs", unwrapped);
    unwrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_checked_and_unchecked() {
        let checked = CheckboxMarker::detect("[X]  shipped").unwrap();
        assert!(checked.checked);
        assert_eq!(checked.matched_len, 5);

        let unchecked = CheckboxMarker::detect("  [ ] todo").unwrap();
        assert!(!unchecked.checked);
        assert_eq!(&"  [ ] todo"[unchecked.matched_len..], "todo");
    }

    #[test]
    fn test_detect_rejects_other_marks() {
        assert!(CheckboxMarker::detect("[-] maybe").is_none());
        assert!(CheckboxMarker::detect("[xx] no").is_none());
        assert!(CheckboxMarker::detect("text [x]").is_none());
    }

    #[test]
    fn test_checkbox_inserted_before_remaining_text() {
        let mut tree = DomTree::parse_fragment("<p>[x] done</p>");
        assert_eq!(materialize_checkboxes(&mut tree), 1);
        assert_eq!(
            tree.to_html(),
            r#"<p><input type="checkbox" disabled="" checked="">done</p>"#
        );
    }

    #[test]
    fn test_marker_only_text_is_removed() {
        let mut tree = DomTree::parse_fragment("<li>[ ]</li>");
        materialize_checkboxes(&mut tree);
        assert_eq!(
            tree.to_html(),
            r#"<li><input type="checkbox" disabled=""></li>"#
        );
    }

    #[test]
    fn test_nested_list_text_is_not_inspected() {
        let mut tree =
            DomTree::parse_fragment("<ul><li><b>item</b><ul><li>[x] nested</li></ul></li></ul>");
        // only the inner <li> has a leading text child
        assert_eq!(materialize_checkboxes(&mut tree), 1);
        assert_eq!(
            tree.to_html(),
            r#"<ul><li><b>item</b><ul><li><input type="checkbox" disabled="" checked="">nested</li></ul></li></ul>"#
        );
    }

    #[test]
    fn test_unwraps_lone_checkbox_paragraph() {
        let mut tree = DomTree::parse_fragment("<ul><li><p>[ ] todo</p></li></ul>");
        materialize_checkboxes(&mut tree);
        assert_eq!(unwrap_checkbox_paragraphs(&mut tree), 1);
        assert_eq!(
            tree.to_html(),
            r#"<ul><li><input type="checkbox" disabled="">todo</li></ul>"#
        );
    }

    #[test]
    fn test_multi_block_item_keeps_paragraphs() {
        let mut tree = DomTree::parse_fragment("<ul><li><p>[x] a</p><p>b</p></li></ul>");
        materialize_checkboxes(&mut tree);
        assert_eq!(unwrap_checkbox_paragraphs(&mut tree), 0);
        assert_eq!(tree.elements_named(&["p"]).len(), 2);
    }
}
