// src/report/preview.rs
//! Marked preview: the input text with every invisible character replaced
//! by a visible `[U+XXXX]` tag.

use crate::registry::{self, code_label};

#[must_use]
pub fn render_marked(text: &str) -> String {
    render_with(text, |c| format!("[{}]", code_label(c)))
}

/// Renders `text`, passing every invisible character through `mark`.
pub fn render_with<F>(text: &str, mut mark: F) -> String
where
    F: FnMut(char) -> String,
{
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if registry::is_invisible(c) {
            out.push_str(&mark(c));
        } else {
            out.push(c);
        }
    }
    out
}
