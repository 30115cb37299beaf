//! Test utilities and helper functions for the pastedown test suite

use kodegen_tools_pastedown::markdown_converter::convert_html_to_markdown;
use kodegen_tools_pastedown::paste::{ClipboardEvent, PasteOutcome, TextBuffer, handle_paste};
use kodegen_tools_pastedown::PasteConfig;

/// Converts `html` with the default configuration, panicking on error
#[allow(dead_code)]
pub fn to_markdown(html: &str) -> String {
    let markdown = convert_html_to_markdown(html, &PasteConfig::default())
        .expect("conversion with default config should succeed");
    println!("Markdown output:\n{}\n---", markdown);
    markdown
}

/// Wraps a fragment the way browsers put rich text on the clipboard
#[allow(dead_code)]
pub fn clipboard_html(fragment: &str) -> String {
    format!(
        "<html><body>\n<!--StartFragment-->{}<!--EndFragment-->\n</body></html>",
        fragment
    )
}

/// Pastes into an empty buffer and returns the outcome and the buffer
#[allow(dead_code)]
pub fn paste_into_empty(
    html: Option<&str>,
    plain: &str,
    config: &PasteConfig,
) -> (PasteOutcome, TextBuffer, ClipboardEvent) {
    let mut event = ClipboardEvent::new(html.map(str::to_string), plain);
    let mut buffer = TextBuffer::default();
    let outcome = handle_paste(&mut event, &mut buffer, config);
    (outcome, buffer, event)
}
