//! Paste orchestration.
//!
//! A paste always suppresses the host's default action. When the clipboard
//! carries rich text it is converted to Markdown; otherwise, or when the
//! conversion fails or yields nothing, the plain text is inserted verbatim.
//! The sink is written exactly once.

pub mod payload;
pub mod sink;

pub use payload::{ClipboardEvent, ClipboardPayload, PasteTrigger};
pub use sink::{InsertionSink, TextBuffer, insert_at_selection};

use crate::config::PasteConfig;
use crate::markdown_converter::{ConversionError, MarkdownConverter, unescape_ordinals};

/// Which branch produced the inserted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteSource {
    /// Converted from the rich-text payload
    Markdown,
    /// Plain text, because there was no rich text
    PlainText,
    /// Plain text, because conversion failed or produced nothing
    Fallback,
}

/// What a paste inserted and where the cursor ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteOutcome {
    pub source: PasteSource,
    pub inserted: String,
    pub cursor: usize,
}

/// Convert clipboard markup to the Markdown a paste inserts.
///
/// # Errors
///
/// Propagates [`ConversionError`] from the converter.
pub fn render_html(converter: &MarkdownConverter, html: &str) -> Result<String, ConversionError> {
    let markdown = converter.convert(html)?;
    Ok(unescape_ordinals(&markdown))
}

/// Handle one paste event with a converter built for `config`.
pub fn handle_paste(
    trigger: &mut dyn PasteTrigger,
    sink: &mut dyn InsertionSink,
    config: &PasteConfig,
) -> PasteOutcome {
    let converter = MarkdownConverter::new(config);
    handle_paste_with(trigger, sink, &converter)
}

/// Handle one paste event with an existing converter.
pub fn handle_paste_with(
    trigger: &mut dyn PasteTrigger,
    sink: &mut dyn InsertionSink,
    converter: &MarkdownConverter,
) -> PasteOutcome {
    trigger.prevent_default();

    let (source, inserted) = match ClipboardPayload::select(trigger.html(), trigger.plain_text()) {
        ClipboardPayload::PlainText(text) => (PasteSource::PlainText, text.to_string()),
        ClipboardPayload::Html(html) => match render_html(converter, html) {
            Ok(markdown) if !markdown.is_empty() || trigger.plain_text().is_empty() => {
                (PasteSource::Markdown, markdown)
            }
            Ok(_) => {
                tracing::warn!("Rich-text paste converted to empty Markdown, using plain text");
                (PasteSource::Fallback, trigger.plain_text().to_string())
            }
            Err(e) => {
                tracing::warn!("Rich-text paste conversion failed: {}, using plain text", e);
                (PasteSource::Fallback, trigger.plain_text().to_string())
            }
        },
    };

    let cursor = sink.insert(&inserted);
    tracing::debug!(
        "Pasted {} bytes ({:?}), cursor at {}",
        inserted.len(),
        source,
        cursor
    );

    PasteOutcome {
        source,
        inserted,
        cursor,
    }
}
