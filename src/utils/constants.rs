//! Shared limits and defaults for the paste pipeline
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Maximum HTML payload accepted by the converter (10 MB)
///
/// Clipboard HTML from word processors is verbose (inline styles, conditional
/// comments), but even a long document stays well below this:
/// - Chat message: < 10 KB
/// - Browser selection of a long article: 200 KB - 1 MB
/// - Multi-page word processor selection: 1-4 MB
///
/// Larger payloads fail conversion and the paste falls back to plain text.
pub const MAX_HTML_SIZE: usize = 10 * 1024 * 1024;

/// Maximum element nesting kept when building the owned DOM
///
/// Elements deeper than this are flattened into their text content so the
/// recursive passes stay well inside the stack.
pub const MAX_HTML_NESTING_DEPTH: usize = 100;

/// Horizontal rule token emitted for `<hr>`
pub const DEFAULT_HR_TOKEN: &str = "---";

/// Emphasis delimiter emitted for `<em>` / `<i>`
pub const DEFAULT_EM_DELIMITER: &str = "_";

/// Tags whose subtrees never reach the Markdown output
pub const SKIPPED_TAGS: [&str; 2] = ["script", "style"];
