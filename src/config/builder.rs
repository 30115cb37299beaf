//! Fluent builder for `PasteConfig`
//!
//! Starts from the defaults; `build()` validates the result.

use anyhow::Result;

use super::types::{BulletMarker, CodeBlockStyle, HeadingStyle, PasteConfig};

#[derive(Debug, Clone, Default)]
pub struct PasteConfigBuilder {
    config: PasteConfig,
}

impl PasteConfig {
    /// Start a builder from the default configuration.
    ///
    /// # Example
    /// ```rust
    /// # use kodegen_tools_pastedown::config::{BulletMarker, PasteConfig};
    /// # fn main() -> anyhow::Result<()> {
    /// let config = PasteConfig::builder()
    ///     .bullet_marker(BulletMarker::Dash)
    ///     .em_delimiter("*")
    ///     .build()?;
    /// assert_eq!(config.em_delimiter(), "*");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn builder() -> PasteConfigBuilder {
        PasteConfigBuilder::default()
    }
}

impl PasteConfigBuilder {
    #[must_use]
    pub fn heading_style(mut self, style: HeadingStyle) -> Self {
        self.config.heading_style = style;
        self
    }

    /// Set the `<hr>` token, e.g. `***` or `___`
    #[must_use]
    pub fn hr_token(mut self, token: impl Into<String>) -> Self {
        self.config.hr_token = token.into();
        self
    }

    #[must_use]
    pub fn bullet_marker(mut self, marker: BulletMarker) -> Self {
        self.config.bullet_marker = marker;
        self
    }

    #[must_use]
    pub fn code_block_style(mut self, style: CodeBlockStyle) -> Self {
        self.config.code_block_style = style;
        self
    }

    #[must_use]
    pub fn em_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.em_delimiter = delimiter.into();
        self
    }

    /// Set the largest HTML payload that will be converted
    #[must_use]
    pub fn max_html_bytes(mut self, bytes: usize) -> Self {
        self.config.max_html_bytes = bytes;
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the emphasis delimiter is not `_` or `*`, the
    /// rule token is not a valid thematic break, or the size limit is zero.
    pub fn build(self) -> Result<PasteConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
