//! Word-under-cursor extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEFAULT_FILTER: Regex = Regex::new(r"[,'`\.:\(\)\[\]\}\{]").unwrap();
}

/// Extract the word under a cursor column, stripping common punctuation.
///
/// The word is the space-delimited token containing `column`, a character
/// index into `line`. Columns past the end of the line are clamped to the
/// last character. A cursor on a space, or a token that is nothing but
/// punctuation, yields an empty string.
pub fn word_at(line: &str, column: usize) -> String {
    word_at_filtered(line, column, &DEFAULT_FILTER)
}

/// Like [`word_at`] with a caller-supplied punctuation filter.
pub fn word_at_filtered(line: &str, column: usize, filter: &Regex) -> String {
    let chars: Vec<char> = line.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let column = column.min(chars.len() - 1);

    let start = chars[..=column]
        .iter()
        .rposition(|c| *c == ' ')
        .map(|i| i + 1)
        .unwrap_or(0);
    let end = chars[column..]
        .iter()
        .position(|c| *c == ' ')
        .map(|i| column + i)
        .unwrap_or(chars.len());
    if start >= end {
        return String::new();
    }

    let word: String = chars[start..end].iter().collect();
    filter.replace_all(&word, "").into_owned()
}
