//! Utility functions for text editing

/// Check if a character glues onto an identifier-like word
///
/// A pattern preceded by one of these is part of a larger token (`in` inside
/// `cin`) and must not be corrected.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Leading whitespace of a line (its indentation prefix)
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, ch)| !ch.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    &line[..end]
}

/// Length of a string in characters (the column unit used everywhere)
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `column` characters of `line`
pub fn prefix_chars(line: &str, column: usize) -> &str {
    let end = line
        .char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    &line[..end]
}
