//! Math spans and blocks marked with `math-inline` / `math-block` classes.

use htmd::{Element, element_handler::Handlers};

use super::RuleContext;
use super::node_util::{has_class, raw_text};

const INLINE_CLASS: &str = "math-inline";
const BLOCK_CLASS: &str = "math-block";

pub(super) fn is_math(element: &Element<'_>) -> bool {
    has_class(element.attrs, INLINE_CLASS) || has_class(element.attrs, BLOCK_CLASS)
}

pub(super) fn emit_math(
    _handlers: &dyn Handlers,
    element: &Element<'_>,
    _context: &RuleContext,
) -> String {
    let text = raw_text(element.node);
    let content = text.trim();

    // Block wins when an element carries both classes
    if has_class(element.attrs, BLOCK_CLASS) {
        format!("\n\n$$\n{content}\n$$\n\n")
    } else {
        format!("${content}$")
    }
}
