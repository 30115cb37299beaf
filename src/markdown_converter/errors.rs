//! Error types for HTML to Markdown conversion

/// Error types for the conversion pipeline
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Markup exceeds the configured size limit
    #[error("HTML payload of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    /// htmd failed to produce Markdown
    #[error("Markdown conversion failed: {0}")]
    Engine(String),
}
