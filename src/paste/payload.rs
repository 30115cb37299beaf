//! Clipboard payloads and the paste trigger boundary.

/// The clipboard representation chosen for one paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardPayload<'a> {
    Html(&'a str),
    PlainText(&'a str),
}

impl<'a> ClipboardPayload<'a> {
    /// Pick the rich-text payload when it has content, else the plain text.
    ///
    /// # Examples
    /// ```
    /// # use kodegen_tools_pastedown::paste::ClipboardPayload;
    /// assert_eq!(
    ///     ClipboardPayload::select(Some("<b>hi</b>"), "hi"),
    ///     ClipboardPayload::Html("<b>hi</b>")
    /// );
    /// assert_eq!(
    ///     ClipboardPayload::select(Some("  \n"), "hi"),
    ///     ClipboardPayload::PlainText("hi")
    /// );
    /// ```
    #[must_use]
    pub fn select(html: Option<&'a str>, plain_text: &'a str) -> Self {
        match html {
            Some(markup) if !markup.trim().is_empty() => Self::Html(markup),
            _ => Self::PlainText(plain_text),
        }
    }
}

/// A paste event as the host delivers it.
pub trait PasteTrigger {
    /// Rich-text markup, when the clipboard carries any.
    fn html(&self) -> Option<&str>;

    /// Plain-text representation; always present, possibly empty.
    fn plain_text(&self) -> &str;

    /// Suppress the host's own paste handling.
    fn prevent_default(&mut self);
}

/// An owned paste event, for hosts without one of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardEvent {
    pub html: Option<String>,
    pub plain_text: String,
    pub default_prevented: bool,
}

impl ClipboardEvent {
    #[must_use]
    pub fn new(html: Option<String>, plain_text: impl Into<String>) -> Self {
        Self {
            html,
            plain_text: plain_text.into(),
            default_prevented: false,
        }
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(None, text)
    }
}

impl PasteTrigger for ClipboardEvent {
    fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    fn plain_text(&self) -> &str {
        &self.plain_text
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
