pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::{floor_char_boundary, max_line_chars};
