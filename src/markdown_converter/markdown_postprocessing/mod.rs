//! Markdown post-processing.
//!
//! Runs on htmd's output:
//! 1. [`collapse_blank_runs`] - one blank line between blocks
//! 2. [`trim_document`] - no leading blank lines or trailing whitespace
//!
//! [`unescape_ordinals`] is applied by the paste orchestrator on top.

pub mod code_fence_detection;
pub mod ordinal_unescaping;
pub mod whitespace_normalization;

pub use code_fence_detection::{CodeFence, FenceTracker, detect_code_fence};
pub use ordinal_unescaping::unescape_ordinals;
pub use whitespace_normalization::{collapse_blank_runs, trim_document};

/// Normalize blank lines and trim the document edges.
pub fn postprocess_markdown(markdown: &str) -> String {
    trim_document(&collapse_blank_runs(markdown))
}
