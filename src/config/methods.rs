//! Validation and loading for `PasteConfig`

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::types::PasteConfig;

impl PasteConfig {
    /// Check field values the Markdown output depends on.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.em_delimiter.as_str(), "_" | "*") {
            bail!(
                "Invalid emphasis delimiter '{}': expected '_' or '*'",
                self.em_delimiter
            );
        }

        if !is_thematic_break(&self.hr_token) {
            bail!(
                "Invalid horizontal rule token '{}': expected three or more of '-', '*' or '_'",
                self.hr_token
            );
        }

        if self.max_html_bytes == 0 {
            bail!("max_html_bytes must be greater than zero");
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse paste configuration JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Three or more of the same `-`, `*` or `_`, optionally space-separated.
fn is_thematic_break(token: &str) -> bool {
    let marks: Vec<char> = token.chars().filter(|c| *c != ' ').collect();
    marks.len() >= 3
        && matches!(marks[0], '-' | '*' | '_')
        && marks.iter().all(|&c| c == marks[0])
}
