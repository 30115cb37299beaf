pub mod config;
pub mod markdown_converter;
pub mod paste;
pub mod utils;

pub use config::{BulletMarker, CodeBlockStyle, HeadingStyle, PasteConfig};
pub use markdown_converter::{
    ConversionError, LogicalTable, MarkdownConverter, convert_html_to_markdown,
};
pub use paste::{
    ClipboardEvent, ClipboardPayload, InsertionSink, PasteOutcome, PasteSource, PasteTrigger,
    TextBuffer, handle_paste, handle_paste_with, insert_at_selection,
};
