// src/text.rs
//! Character and word metrics shared by the scanner, reporter and selection.
//!
//! Whitespace here is the JavaScript `\s` class, not `char::is_whitespace`.
//! Existing reports were produced with that class, and the two disagree on
//! U+FEFF (whitespace in JS) and U+0085 (whitespace in Rust).

/// Returns true if `c` belongs to the JavaScript `\s` class.
#[must_use]
pub fn is_space(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Number of Unicode scalar values in `text`.
#[must_use]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of whitespace-delimited words. Blank text has zero words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split(is_space).filter(|w| !w.is_empty()).count()
}

/// Returns the scalars in `[start, end)` as an owned string.
///
/// Indices past the end of the text are clamped.
#[must_use]
pub fn slice_chars(text: &str, start: usize, end: usize) -> String {
    if end <= start {
        return String::new();
    }
    text.chars().skip(start).take(end - start).collect()
}
