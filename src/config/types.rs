//! Core configuration types for the paste pipeline
//!
//! `PasteConfig` carries the Markdown engine options and the payload size
//! limit. Every field has a default, so a partial JSON document is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::utils::{DEFAULT_EM_DELIMITER, DEFAULT_HR_TOKEN, MAX_HTML_SIZE};

/// Heading syntax for `<h1>`..`<h6>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// `# Heading`
    #[default]
    Atx,
    /// Underlined with `===` / `---` (levels 1 and 2 only)
    Setext,
}

/// Marker for unordered list items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletMarker {
    /// `* item`
    #[default]
    Asterisk,
    /// `- item`
    Dash,
}

/// Code block syntax for `<pre><code>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeBlockStyle {
    #[default]
    Fenced,
    /// Four-space indentation; the language tag is dropped
    Indented,
}

/// Main configuration struct for paste conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteConfig {
    pub(crate) heading_style: HeadingStyle,
    /// Token emitted for `<hr>`
    pub(crate) hr_token: String,
    pub(crate) bullet_marker: BulletMarker,
    pub(crate) code_block_style: CodeBlockStyle,
    /// `_` or `*`
    pub(crate) em_delimiter: String,
    /// Larger payloads are not converted; the paste falls back to plain text
    pub(crate) max_html_bytes: usize,
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::default(),
            hr_token: DEFAULT_HR_TOKEN.to_string(),
            bullet_marker: BulletMarker::default(),
            code_block_style: CodeBlockStyle::default(),
            em_delimiter: DEFAULT_EM_DELIMITER.to_string(),
            max_html_bytes: MAX_HTML_SIZE,
        }
    }
}
