//! Text insertion at the cursor.

use crate::utils::floor_char_boundary;

/// Where pasted text ends up.
pub trait InsertionSink {
    /// Replace the current selection with `text` and return the new cursor
    /// position, immediately after the inserted text.
    fn insert(&mut self, text: &str) -> usize;
}

/// Replace `current[start..end]` with `new_text`.
///
/// Offsets are byte offsets. They are clamped to the text, a reversed range
/// is normalized, and an offset inside a code point moves back to the
/// previous boundary. Returns the new text and the cursor position after the
/// insertion.
///
/// # Examples
/// ```
/// # use kodegen_tools_pastedown::paste::insert_at_selection;
/// let (text, cursor) = insert_at_selection("Hello world", 6, 11, "there");
/// assert_eq!(text, "Hello there");
/// assert_eq!(cursor, 11);
/// ```
#[must_use]
pub fn insert_at_selection(current: &str, start: usize, end: usize, new_text: &str) -> (String, usize) {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start = floor_char_boundary(current, start);
    let end = floor_char_boundary(current, end);

    let mut result = String::with_capacity(current.len() - (end - start) + new_text.len());
    result.push_str(&current[..start]);
    result.push_str(new_text);
    result.push_str(&current[end..]);

    (result, start + new_text.len())
}

/// A plain-text editing surface: contents plus a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    selection_start: usize,
    selection_end: usize,
}

impl TextBuffer {
    /// Buffer holding `text` with the cursor at the end.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            selection_start: end,
            selection_end: end,
        }
    }

    /// Select `start..end` (byte offsets, normalized like an insertion).
    #[must_use]
    pub fn with_selection(mut self, start: usize, end: usize) -> Self {
        self.select(start, end);
        self
    }

    pub fn select(&mut self, start: usize, end: usize) {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.selection_start = floor_char_boundary(&self.text, start);
        self.selection_end = floor_char_boundary(&self.text, end);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    /// Cursor position, i.e. the end of the selection.
    pub fn cursor(&self) -> usize {
        self.selection_end
    }
}

impl InsertionSink for TextBuffer {
    fn insert(&mut self, text: &str) -> usize {
        let (updated, cursor) =
            insert_at_selection(&self.text, self.selection_start, self.selection_end, text);
        self.text = updated;
        self.selection_start = cursor;
        self.selection_end = cursor;
        cursor
    }
}
