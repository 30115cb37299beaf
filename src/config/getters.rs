//! Getter methods for `PasteConfig`

use super::types::{BulletMarker, CodeBlockStyle, HeadingStyle, PasteConfig};

impl PasteConfig {
    #[must_use]
    pub fn heading_style(&self) -> HeadingStyle {
        self.heading_style
    }

    #[must_use]
    pub fn hr_token(&self) -> &str {
        &self.hr_token
    }

    #[must_use]
    pub fn bullet_marker(&self) -> BulletMarker {
        self.bullet_marker
    }

    #[must_use]
    pub fn code_block_style(&self) -> CodeBlockStyle {
        self.code_block_style
    }

    #[must_use]
    pub fn em_delimiter(&self) -> &str {
        &self.em_delimiter
    }

    #[must_use]
    pub fn max_html_bytes(&self) -> usize {
        self.max_html_bytes
    }
}
