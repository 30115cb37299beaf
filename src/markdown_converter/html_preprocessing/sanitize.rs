//! Allow-list attribute sanitization.
//!
//! Every attribute not in [`ALLOWED_ATTRIBUTES`] is removed from every
//! element: inline styles, event handlers, `data-*` tracking, editor cruft.
//! What survives is exactly what the Markdown rules read: link and image
//! targets, alt/title text, and class hints (`language-*`, `math-*`).
//!
//! Elements and text are never removed here.

use super::super::dom::DomTree;

/// Attribute names kept by [`sanitize_attributes`], compared case-insensitively.
pub const ALLOWED_ATTRIBUTES: [&str; 5] = ["href", "src", "alt", "title", "class"];

/// Whether `name` survives sanitization.
#[inline]
pub fn is_allowed_attribute(name: &str) -> bool {
    ALLOWED_ATTRIBUTES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(name))
}

/// Strip every non-allow-listed attribute from every element in `tree`.
///
/// Returns the number of attributes removed.
pub fn sanitize_attributes(tree: &mut DomTree) -> usize {
    let mut removed = 0;

    tree.for_each_element_mut(|el| {
        let before = el.attrs.len();
        el.attrs.retain(|(name, _)| is_allowed_attribute(name));
        removed += before - el.attrs.len();
    });

    tracing::debug!("Sanitizer removed {} attributes", removed);
    removed
}
