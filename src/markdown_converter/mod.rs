//! HTML to Markdown conversion for pasted rich text.
//!
//! Pipeline:
//! 1. Size check against `max_html_bytes`
//! 2. Parse into an owned [`DomTree`] (never fails)
//! 3. Sanitize attributes to the allow-list
//! 4. Structural rewrite: table headers, task-list checkboxes
//! 5. Serialize and convert with htmd plus the [`custom_handlers::RULES`]
//! 6. Collapse blank-line runs and trim
//!
//! # Usage
//!
//! ```rust
//! # use kodegen_tools_pastedown::config::PasteConfig;
//! # use kodegen_tools_pastedown::markdown_converter::convert_html_to_markdown;
//! let html = r#"<pre><code class="language-python">print(1)</code></pre>"#;
//! let markdown = convert_html_to_markdown(html, &PasteConfig::default())?;
//! assert_eq!(markdown, "```python\nprint(1)\n```");
//! # Ok::<(), kodegen_tools_pastedown::markdown_converter::ConversionError>(())
//! ```

pub mod custom_handlers;
pub mod dom;
pub mod errors;
pub mod html_preprocessing;
pub mod markdown_postprocessing;
pub mod table_renderer;

pub use dom::{DomNode, DomTree, ElementData};
pub use errors::ConversionError;
pub use html_preprocessing::{RewriteStats, rewrite_structure, sanitize_attributes};
pub use markdown_postprocessing::{postprocess_markdown, unescape_ordinals};
pub use table_renderer::LogicalTable;

use htmd::HtmlToMarkdown;

use crate::config::PasteConfig;

/// A converter bound to one configuration.
///
/// Holds the configured htmd instance so repeated pastes skip rebuilding it.
/// Carries no per-paste state.
pub struct MarkdownConverter {
    engine: HtmlToMarkdown,
    max_html_bytes: usize,
}

impl MarkdownConverter {
    #[must_use]
    pub fn new(config: &PasteConfig) -> Self {
        Self {
            engine: custom_handlers::create_converter(config),
            max_html_bytes: config.max_html_bytes(),
        }
    }

    /// Convert clipboard markup to Markdown.
    ///
    /// # Errors
    ///
    /// [`ConversionError::PayloadTooLarge`] when `html` is larger than the
    /// configured limit, [`ConversionError::Engine`] when htmd fails.
    pub fn convert(&self, html: &str) -> Result<String, ConversionError> {
        // Stage 1: Size check
        if html.len() > self.max_html_bytes {
            tracing::warn!(
                "HTML payload too large: {} bytes (limit {})",
                html.len(),
                self.max_html_bytes
            );
            return Err(ConversionError::PayloadTooLarge {
                size: html.len(),
                limit: self.max_html_bytes,
            });
        }

        // Stages 2-4: Owned tree, sanitized and rewritten
        let prepared = prepare_html(html);

        // Stage 5: htmd with the rule set
        let markdown = self
            .engine
            .convert(&prepared)
            .map_err(|e| ConversionError::Engine(e.to_string()))?;

        // Stage 6: Blank-line normalization
        Ok(postprocess_markdown(&markdown))
    }
}

impl std::fmt::Debug for MarkdownConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownConverter")
            .field("max_html_bytes", &self.max_html_bytes)
            .finish_non_exhaustive()
    }
}

/// Parse, sanitize and rewrite `html`, returning the markup htmd receives.
pub fn prepare_html(html: &str) -> String {
    let mut tree = DomTree::parse_fragment(html);

    let stripped = sanitize_attributes(&mut tree);
    let stats = rewrite_structure(&mut tree);
    tracing::debug!(
        "Prepared paste HTML: {} attributes stripped, {:?}",
        stripped,
        stats
    );

    tree.to_html()
}

/// Convert clipboard markup to Markdown with `config`.
///
/// Builds a [`MarkdownConverter`] for the call; hold one instead when
/// converting repeatedly.
///
/// # Errors
///
/// See [`MarkdownConverter::convert`].
pub fn convert_html_to_markdown(html: &str, config: &PasteConfig) -> Result<String, ConversionError> {
    MarkdownConverter::new(config).convert(html)
}
