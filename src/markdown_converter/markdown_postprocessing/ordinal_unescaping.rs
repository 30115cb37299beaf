//! Ordinal unescaping.
//!
//! htmd escapes a period after digits so that text such as `1984. A year`
//! cannot start an ordered list. Pasted text wants the literal ordinal back.

use regex::Regex;
use std::sync::LazyLock;

use super::code_fence_detection::FenceTracker;

/// A digit followed by an escaped period.
static ESCAPED_ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d)\\\.").expect("ESCAPED_ORDINAL: hardcoded regex is valid")
});

/// Rewrite `<digit>\.` to `<digit>.` outside fenced code.
///
/// Escaped periods not preceded by a digit are left alone.
///
/// # Examples
/// ```
/// # use kodegen_tools_pastedown::markdown_converter::markdown_postprocessing::unescape_ordinals;
/// assert_eq!(unescape_ordinals(r"1\. First"), "1. First");
/// assert_eq!(unescape_ordinals(r"etc\. and so on"), r"etc\. and so on");
/// ```
pub fn unescape_ordinals(markdown: &str) -> String {
    // Fast path
    if !markdown.contains("\\.") {
        return markdown.to_string();
    }

    let mut tracker = FenceTracker::new();
    let lines: Vec<String> = markdown
        .split('\n')
        .map(|line| {
            if tracker.observe(line) {
                line.to_string()
            } else {
                ESCAPED_ORDINAL.replace_all(line, "$1.").into_owned()
            }
        })
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_unescaped() {
        assert_eq!(unescape_ordinals(r"2024\. was a year"), "2024. was a year");
        assert_eq!(unescape_ordinals("see 3\\. and 4\\."), "see 3. and 4.");
    }

    #[test]
    fn test_other_escaped_periods_survive() {
        assert_eq!(unescape_ordinals(r"a\. b"), r"a\. b");
        assert_eq!(unescape_ordinals(r"\.hidden"), r"\.hidden");
    }

    #[test]
    fn test_fenced_code_is_untouched() {
        let input = "1\\. item\n```\nprintf(\"1\\.\");\n```";
        assert_eq!(
            unescape_ordinals(input),
            "1. item\n```\nprintf(\"1\\.\");\n```"
        );
    }

    #[test]
    fn test_quoted_fenced_code_is_untouched() {
        let input = "> 1\\. item\n> ```\n> printf(\"1\\.\");\n> ```";
        assert_eq!(
            unescape_ordinals(input),
            "> 1. item\n> ```\n> printf(\"1\\.\");\n> ```"
        );
    }
}
