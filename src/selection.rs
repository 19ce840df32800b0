// src/selection.rs
//! Position navigation: which span to highlight around a finding, and where
//! that finding sits in line/column terms.

use crate::text::is_space;
use serde::Serialize;

/// Longest span a selection may cover before falling back to a fixed window.
pub const MAX_SELECTION: usize = 20;

const FALLBACK_BEFORE: usize = 5;
const FALLBACK_AFTER: usize = 6;

/// 1-based line and column of a scalar index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// Computes the `[start, end)` range to highlight around `index`.
///
/// Starts from a window of half the cap on each side, widens it so no word is
/// cut, and falls back to five scalars before and six after the index when the
/// widened span exceeds [`MAX_SELECTION`]. Returns `None` if `index` is not a
/// valid position in `text`.
#[must_use]
pub fn selection_range(text: &str, index: usize) -> Option<(usize, usize)> {
    let chars: Vec<char> = text.chars().collect();
    selection_range_in(&chars, index)
}

/// [`selection_range`] over text already split into scalars.
#[must_use]
pub fn selection_range_in(chars: &[char], index: usize) -> Option<(usize, usize)> {
    let len = chars.len();
    if index >= len {
        return None;
    }

    let half = MAX_SELECTION / 2;
    let mut start = index.saturating_sub(half);
    let mut end = (index + 1 + half).min(len);

    while start > 0 && !is_space(chars[start - 1]) {
        start -= 1;
    }
    while end < len && !is_space(chars[end]) {
        end += 1;
    }

    if end - start > MAX_SELECTION {
        start = index.saturating_sub(FALLBACK_BEFORE);
        end = (index + FALLBACK_AFTER).min(len);
    }
    Some((start, end))
}

/// Returns the line and column of `index`, or `None` past the end of `text`.
#[must_use]
pub fn locate(text: &str, index: usize) -> Option<Location> {
    let mut line = 1;
    let mut column = 1;
    for (i, c) in text.chars().enumerate() {
        if i == index {
            return Some(Location { line, column });
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    None
}

/// Locates every index in one pass over `text`.
///
/// `indices` must be ascending. Indices past the end map to `None`.
#[must_use]
pub fn locate_all(text: &str, indices: &[usize]) -> Vec<Option<Location>> {
    let mut out = Vec::with_capacity(indices.len());
    let mut pending = indices.iter().copied().peekable();
    let mut line = 1;
    let mut column = 1;

    for (i, c) in text.chars().enumerate() {
        while pending.next_if_eq(&i).is_some() {
            out.push(Some(Location { line, column }));
        }
        if pending.peek().is_none() {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    out.resize(indices.len(), None);
    out
}
