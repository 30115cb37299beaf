//! Paste orchestration: payload selection, fallbacks and insertion

mod common;

use common::{clipboard_html, paste_into_empty};
use kodegen_tools_pastedown::PasteConfig;
use kodegen_tools_pastedown::markdown_converter::{ConversionError, MarkdownConverter};
use kodegen_tools_pastedown::paste::{
    ClipboardEvent, InsertionSink, PasteSource, PasteTrigger, TextBuffer, handle_paste,
    handle_paste_with, render_html,
};

#[test]
fn test_plain_text_is_inserted_byte_for_byte() {
    let plain = "  tabs\tand\r\nCRLF\n\n\n*not* markdown 1\\. ";
    let (outcome, buffer, event) = paste_into_empty(None, plain, &PasteConfig::default());

    assert_eq!(outcome.source, PasteSource::PlainText);
    assert_eq!(buffer.text(), plain);
    assert_eq!(outcome.cursor, plain.len());
    assert!(event.default_prevented);
}

#[test]
fn test_blank_html_falls_through_to_plain_text() {
    let (outcome, buffer, _) = paste_into_empty(Some(" \n "), "plain", &PasteConfig::default());
    assert_eq!(outcome.source, PasteSource::PlainText);
    assert_eq!(buffer.text(), "plain");
}

#[test]
fn test_rich_text_is_converted() {
    let html = clipboard_html("<h1>Title</h1><p>Some <strong>bold</strong> text</p>");
    let (outcome, buffer, event) = paste_into_empty(Some(&html), "Title Some bold text", &PasteConfig::default());

    println!("Inserted:\n{}", buffer.text());
    assert_eq!(outcome.source, PasteSource::Markdown);
    assert!(buffer.text().starts_with("# Title"));
    assert!(buffer.text().contains("**bold**"));
    assert!(event.default_prevented);
}

#[test]
fn test_ordinals_are_unescaped_after_conversion() {
    let converter = MarkdownConverter::new(&PasteConfig::default());
    let markdown = render_html(&converter, "<p>1. First</p><p>Version 2. Second</p>").expect("conversion");
    assert_eq!(markdown, "1. First\n\nVersion 2. Second");
}

#[test]
fn test_quoted_code_block_is_left_verbatim() {
    let html = clipboard_html(r#"<blockquote><pre><code>printf("1\.");</code></pre></blockquote>"#);
    let (outcome, buffer, _) = paste_into_empty(Some(&html), "", &PasteConfig::default());

    println!("Inserted:\n{}", buffer.text());
    assert_eq!(outcome.source, PasteSource::Markdown);
    assert_eq!(buffer.text(), "> ```\n> printf(\"1\\.\");\n> ```");
}

#[test]
fn test_oversized_payload_falls_back() {
    let config = PasteConfig::builder()
        .max_html_bytes(16)
        .build()
        .expect("valid config");
    let html = "<p>this payload is longer than sixteen bytes</p>";

    let converter = MarkdownConverter::new(&config);
    match converter.convert(html) {
        Err(ConversionError::PayloadTooLarge { size, limit }) => {
            assert_eq!(size, html.len());
            assert_eq!(limit, 16);
        }
        other => panic!("expected PayloadTooLarge, got {:?}", other),
    }

    let (outcome, buffer, _) = paste_into_empty(Some(html), "fallback text", &config);
    assert_eq!(outcome.source, PasteSource::Fallback);
    assert_eq!(buffer.text(), "fallback text");
}

#[test]
fn test_empty_conversion_falls_back_to_plain_text() {
    let html = "<script>only()</script>";
    let (outcome, buffer, _) = paste_into_empty(Some(html), "visible", &PasteConfig::default());
    assert_eq!(outcome.source, PasteSource::Fallback);
    assert_eq!(buffer.text(), "visible");
}

#[test]
fn test_insert_replaces_selection_and_moves_cursor() {
    let mut buffer = TextBuffer::new("Hello CURSOR world").with_selection(6, 12);
    let mut event = ClipboardEvent::new(Some("<em>there</em>".to_string()), "there");

    let outcome = handle_paste(&mut event, &mut buffer, &PasteConfig::default());

    assert_eq!(buffer.text(), "Hello _there_ world");
    assert_eq!(outcome.cursor, 6 + "_there_".len());
    assert_eq!(buffer.selection(), (outcome.cursor, outcome.cursor));
}

/// Sink that records every insertion
#[derive(Default)]
struct RecordingSink {
    calls: Vec<String>,
}

impl InsertionSink for RecordingSink {
    fn insert(&mut self, text: &str) -> usize {
        self.calls.push(text.to_string());
        text.len()
    }
}

/// Trigger whose payload is read through the trait only
struct HostEvent {
    html: Option<&'static str>,
    plain: &'static str,
    prevented: u32,
}

impl PasteTrigger for HostEvent {
    fn html(&self) -> Option<&str> {
        self.html
    }

    fn plain_text(&self) -> &str {
        self.plain
    }

    fn prevent_default(&mut self) {
        self.prevented += 1;
    }
}

#[test]
fn test_sink_is_written_exactly_once() {
    let converter = MarkdownConverter::new(&PasteConfig::default());

    for html in [Some("<p>a<br>b</p>"), None, Some("<script>x</script>")] {
        let mut trigger = HostEvent {
            html,
            plain: "plain",
            prevented: 0,
        };
        let mut sink = RecordingSink::default();
        handle_paste_with(&mut trigger, &mut sink, &converter);

        assert_eq!(sink.calls.len(), 1, "one insertion for {:?}", html);
        assert_eq!(trigger.prevented, 1);
    }
}
