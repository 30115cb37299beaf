//! Code rules: fenced blocks and inline code/sample spans.
//!
//! Both read the raw text of the code element instead of the converted
//! children, so code contents are never Markdown-escaped.

use std::rc::Rc;

use htmd::{Element, element_handler::Handlers};
use markup5ever_rcdom::Node;

use super::RuleContext;
use super::node_util::{
    first_significant_child, get_attr, has_ancestor, is_element, node_attrs, raw_text,
};
use crate::config::CodeBlockStyle;

/// Minimum fence length.
const MIN_FENCE_LEN: usize = 3;

/// `<pre>` whose first non-blank child is `<code>`.
pub(super) fn is_code_block(element: &Element<'_>) -> bool {
    code_child(element.node).is_some()
}

pub(super) fn emit_code_block(
    handlers: &dyn Handlers,
    element: &Element<'_>,
    context: &RuleContext,
) -> String {
    let Some(code) = code_child(element.node) else {
        return handlers.walk_children(element.node).content;
    };

    let language = node_attrs(&code)
        .and_then(|attrs| get_attr(&attrs, "class"))
        .and_then(|class| language_from_class(&class))
        .unwrap_or_default();

    let mut body = raw_text(&code);
    if body.ends_with('\n') {
        body.pop();
    }

    match context.code_block_style {
        CodeBlockStyle::Fenced => {
            let fence = fence_for(&body);
            format!("\n\n{fence}{language}\n{body}\n{fence}\n\n")
        }
        CodeBlockStyle::Indented => {
            let indented: Vec<String> = body
                .split('\n')
                .map(|line| {
                    if line.is_empty() {
                        String::new()
                    } else {
                        format!("    {line}")
                    }
                })
                .collect();
            format!("\n\n{}\n\n", indented.join("\n"))
        }
    }
}

/// `<code>`/`<samp>` outside any `<pre>`.
pub(super) fn is_inline_code(element: &Element<'_>) -> bool {
    !has_ancestor(element.node, "pre")
}

pub(super) fn emit_inline_code(
    _handlers: &dyn Handlers,
    element: &Element<'_>,
    _context: &RuleContext,
) -> String {
    let content = raw_text(element.node).replace(['\r', '\n'], " ");
    wrap_inline_code(&content)
}

/// Wrap `content` in backticks, doubling them when it holds a backtick.
///
/// # Examples
/// ```
/// # use kodegen_tools_pastedown::markdown_converter::custom_handlers::wrap_inline_code;
/// assert_eq!(wrap_inline_code("let x"), "`let x`");
/// assert_eq!(wrap_inline_code("a`b"), "`` a`b ``");
/// assert_eq!(wrap_inline_code(""), "");
/// ```
pub fn wrap_inline_code(content: &str) -> String {
    if content.trim().is_empty() {
        String::new()
    } else if content.contains('`') {
        format!("`` {content} ``")
    } else {
        format!("`{content}`")
    }
}

/// Extract `XXX` from a `language-XXX` class token.
pub fn language_from_class(class: &str) -> Option<String> {
    class
        .split_whitespace()
        .find_map(|token| token.strip_prefix("language-"))
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
}

/// A backtick fence longer than any backtick run in `body`.
pub fn fence_for(body: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in body.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat(MIN_FENCE_LEN.max(longest + 1))
}

fn code_child(node: &Rc<Node>) -> Option<Rc<Node>> {
    first_significant_child(node).filter(|child| is_element(child, "code"))
}
