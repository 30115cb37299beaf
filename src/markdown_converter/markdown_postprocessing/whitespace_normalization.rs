//! Blank-line normalization for converted Markdown.

use super::code_fence_detection::FenceTracker;

/// Collapse every run of blank or whitespace-only lines into exactly one
/// empty line. Lines inside fenced code are kept as they are.
///
/// # Examples
/// ```
/// # use kodegen_tools_pastedown::markdown_converter::markdown_postprocessing::collapse_blank_runs;
/// assert_eq!(collapse_blank_runs("a\n\n \n\t\n\nb"), "a\n\nb");
/// assert_eq!(collapse_blank_runs("```\nx\n\n\ny\n```"), "```\nx\n\n\ny\n```");
/// ```
pub fn collapse_blank_runs(markdown: &str) -> String {
    let mut result = String::with_capacity(markdown.len());
    let mut tracker = FenceTracker::new();
    let mut previous_blank = false;

    for (idx, line) in markdown.split('\n').enumerate() {
        let in_code = tracker.observe(line);
        let blank = !in_code && line.trim().is_empty();

        if blank && previous_blank {
            continue;
        }
        if idx > 0 {
            result.push('\n');
        }
        if !blank {
            result.push_str(line);
        }
        previous_blank = blank;
    }

    result
}

/// Drop leading blank lines and all trailing whitespace.
///
/// Leading spaces of the first content line survive, so an indented code
/// block at the start keeps its indentation.
pub fn trim_document(markdown: &str) -> String {
    let start = markdown
        .split_inclusive('\n')
        .take_while(|line| line.trim().is_empty())
        .map(str::len)
        .sum::<usize>();
    markdown[start..].trim_end().to_string()
}
