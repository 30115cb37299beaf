//! Tight list items.
//!
//! A paragraph that is the only element inside its `<li>` is emitted without
//! the paragraph's blank-line padding, so single-paragraph items stay tight.
//! Items with several block children fall through to the default paragraph
//! rule and render loose.

use htmd::{Element, element_handler::Handlers};

use super::RuleContext;
use super::node_util::{element_children, is_element, parent_node};

pub(super) fn is_tight_list_paragraph(element: &Element<'_>) -> bool {
    parent_node(element.node)
        .is_some_and(|parent| is_element(&parent, "li") && element_children(&parent).len() == 1)
}

pub(super) fn emit_tight_list_paragraph(
    handlers: &dyn Handlers,
    element: &Element<'_>,
    _context: &RuleContext,
) -> String {
    handlers.walk_children(element.node).content
}
