//! HTML preprocessing over the owned DOM.
//!
//! Runs before the Markdown engine sees the markup:
//! 1. [`sanitize_attributes`] - allow-list attribute stripping
//! 2. [`rewrite_structure`] - header inference, checkbox detection,
//!    checkbox paragraph unwrapping (in that order)

pub mod sanitize;
pub mod table_preprocessing;
pub mod task_lists;

pub use sanitize::{ALLOWED_ATTRIBUTES, is_allowed_attribute, sanitize_attributes};
pub use table_preprocessing::infer_header_rows;
pub use task_lists::{
    CheckboxMarker, checkbox_element, is_checkbox, materialize_checkboxes,
    unwrap_checkbox_paragraphs,
};

use super::dom::DomTree;

/// Mutation counts from one [`rewrite_structure`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub headers_inferred: usize,
    pub checkboxes_inserted: usize,
    pub paragraphs_unwrapped: usize,
}

/// Run the structural rewrite passes in their required order.
///
/// Header inference and checkbox detection are independent; unwrapping
/// looks for the checkboxes the detection pass inserted.
pub fn rewrite_structure(tree: &mut DomTree) -> RewriteStats {
    let headers_inferred = infer_header_rows(tree);
    let checkboxes_inserted = materialize_checkboxes(tree);
    let paragraphs_unwrapped = unwrap_checkbox_paragraphs(tree);

    RewriteStats {
        headers_inferred,
        checkboxes_inserted,
        paragraphs_unwrapped,
    }
}
