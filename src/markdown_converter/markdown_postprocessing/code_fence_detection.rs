//! Code fence detection and tracking.

/// An open code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeFence {
    pub char: char,   // '`' or '~'
    pub count: usize, // Number of characters in the fence
}

/// Detect a code fence marker at the start of a line.
///
/// Returns `Some((char, count))` when the line starts with 3+ backticks or
/// tildes. Blockquote markers (`>`, `> `) in front of the fence are skipped.
pub fn detect_code_fence(line: &str) -> Option<(char, usize)> {
    parse_fence(line).map(|(char, count, _)| (char, count))
}

/// Fence character, length and the text after the fence run.
fn parse_fence(line: &str) -> Option<(char, usize, &str)> {
    let content = strip_quote_markers(line);

    for fence_char in ['`', '~'] {
        if content.starts_with(fence_char) {
            let count = content.chars().take_while(|&c| c == fence_char).count();
            if count >= 3 {
                // Fence chars are ASCII
                return Some((fence_char, count, &content[count..]));
            }
        }
    }

    None
}

/// Strip leading whitespace and any nesting of blockquote markers.
fn strip_quote_markers(line: &str) -> &str {
    let mut rest = line.trim_start();
    while let Some(inner) = rest.strip_prefix('>') {
        rest = inner.trim_start();
    }
    rest
}

/// Tracks whether a line-by-line scan is inside fenced code.
///
/// A fence closes only on a marker of the same character that is at least
/// as long as the opening one and carries no info string, so a ```` ```` ````
/// block may contain ```` ``` ```` or ```` ```rust ````.
#[derive(Debug, Default)]
pub struct FenceTracker {
    open: Option<CodeFence>,
}

impl FenceTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line. Returns true when the line is a fence marker or
    /// lies inside a fenced block.
    pub fn observe(&mut self, line: &str) -> bool {
        match (self.open, parse_fence(line)) {
            (None, Some((char, count, _))) => {
                self.open = Some(CodeFence { char, count });
                true
            }
            (Some(open), Some((char, count, rest)))
                if char == open.char && count >= open.count && rest.trim().is_empty() =>
            {
                self.open = None;
                true
            }
            (Some(_), _) => true,
            (None, None) => false,
        }
    }

    pub fn in_fence(&self) -> bool {
        self.open.is_some()
    }
}
