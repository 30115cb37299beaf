//! UTF-8-safe string helpers
//!
//! Host selections arrive as raw offsets which may point past the end of the
//! text or into the middle of a multi-byte character. These helpers turn such
//! offsets into valid slice boundaries instead of panicking.

/// Clamp a byte offset into `s` and move it back to the nearest char boundary.
///
/// # Examples
/// ```
/// # use kodegen_tools_pastedown::utils::string_utils::floor_char_boundary;
/// assert_eq!(floor_char_boundary("hello", 3), 3);
/// assert_eq!(floor_char_boundary("hello", 99), 5);
///
/// // "é" is two bytes; offset 2 sits inside it
/// assert_eq!(floor_char_boundary("aé", 2), 1);
/// ```
#[inline]
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut idx = index;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Count characters (not bytes) in the longest line of `s`.
///
/// Used for table column widths, which are measured in characters.
#[inline]
pub fn max_line_chars(s: &str) -> usize {
    s.split('\n').map(|line| line.chars().count()).max().unwrap_or(0)
}
