//! Utility modules

pub mod text;

pub use text::{char_len, is_word_char, leading_whitespace, prefix_chars};
