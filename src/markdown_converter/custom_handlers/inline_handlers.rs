//! Small inline and void-element rules.

use htmd::{Element, element_handler::Handlers};

use super::RuleContext;
use super::node_util::{get_attr, has_attr};

pub(super) fn always(_element: &Element<'_>) -> bool {
    true
}

/// `<br>` is a single newline, in paragraphs and everywhere else.
pub(super) fn emit_line_break(
    _handlers: &dyn Handlers,
    _element: &Element<'_>,
    _context: &RuleContext,
) -> String {
    "\n".to_string()
}

pub(super) fn emit_horizontal_rule(
    _handlers: &dyn Handlers,
    _element: &Element<'_>,
    context: &RuleContext,
) -> String {
    format!("\n\n{}\n\n", context.hr_token)
}

pub(super) fn emit_emphasis(
    handlers: &dyn Handlers,
    element: &Element<'_>,
    context: &RuleContext,
) -> String {
    let content = handlers.walk_children(element.node).content;
    wrap_delimited(&content, &context.em_delimiter)
}

pub(super) fn emit_strikethrough(
    handlers: &dyn Handlers,
    element: &Element<'_>,
    _context: &RuleContext,
) -> String {
    let content = handlers.walk_children(element.node).content;
    wrap_delimited(&content, "~~")
}

/// `<input type="checkbox">`, as inserted by the task-list rewrite.
pub(super) fn is_checkbox(element: &Element<'_>) -> bool {
    get_attr(element.attrs, "type").is_some_and(|t| t.eq_ignore_ascii_case("checkbox"))
}

pub(super) fn emit_checkbox(
    _handlers: &dyn Handlers,
    element: &Element<'_>,
    _context: &RuleContext,
) -> String {
    if has_attr(element.attrs, "checked") {
        "[x] ".to_string()
    } else {
        "[ ] ".to_string()
    }
}

/// Wrap the non-blank core of `content` in `delimiter`.
///
/// Edge whitespace stays outside the delimiters (`_ a _` is not emphasis),
/// and blank content is returned untouched.
pub fn wrap_delimited(content: &str, delimiter: &str) -> String {
    let core = content.trim();
    if core.is_empty() {
        return content.to_string();
    }
    let leading = &content[..content.len() - content.trim_start().len()];
    let trailing = &content[content.trim_end().len()..];
    format!("{leading}{delimiter}{core}{delimiter}{trailing}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_delimited_keeps_edge_whitespace_outside() {
        assert_eq!(wrap_delimited("word", "_"), "_word_");
        assert_eq!(wrap_delimited(" two words ", "*"), " *two words* ");
        assert_eq!(wrap_delimited("gone", "~~"), "~~gone~~");
    }

    #[test]
    fn test_wrap_delimited_leaves_blank_content() {
        assert_eq!(wrap_delimited("", "_"), "");
        assert_eq!(wrap_delimited("  ", "_"), "  ");
    }
}
