// src/registry.rs
//! The curated set of invisible code points the scanner looks for.
//!
//! Membership is an exact match on the scalar value. Nothing here is derived
//! from Unicode general categories.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One invisible character: its scalar value and a human-readable name that
/// embeds the `U+XXXX` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvisibleCharDef {
    pub code_point: char,
    pub name: &'static str,
}

impl InvisibleCharDef {
    /// Returns the `U+XXXX` label for this code point.
    #[must_use]
    pub fn code_label(&self) -> String {
        code_label(self.code_point)
    }
}

/// Formats a scalar value as `U+XXXX` (at least four uppercase hex digits).
#[must_use]
pub fn code_label(c: char) -> String {
    format!("U+{:04X}", u32::from(c))
}

/// Registry entries in display order.
pub const INVISIBLE_CHARS: &[InvisibleCharDef] = &[
    // === ZERO-WIDTH ===
    InvisibleCharDef { code_point: '\u{200B}', name: "Zero Width Space (U+200B)" },
    InvisibleCharDef { code_point: '\u{200C}', name: "Zero Width Non-Joiner (U+200C)" },
    InvisibleCharDef { code_point: '\u{200D}', name: "Zero Width Joiner (U+200D)" },
    InvisibleCharDef { code_point: '\u{FEFF}', name: "Zero Width No-Break Space (U+FEFF)" },
    InvisibleCharDef { code_point: '\u{2060}', name: "Word Joiner (U+2060)" },
    InvisibleCharDef { code_point: '\u{180E}', name: "Mongolian Vowel Separator (U+180E)" },
    // === DIRECTIONAL ===
    InvisibleCharDef { code_point: '\u{200E}', name: "Left-to-Right Mark (U+200E)" },
    InvisibleCharDef { code_point: '\u{200F}', name: "Right-to-Left Mark (U+200F)" },
    InvisibleCharDef { code_point: '\u{202A}', name: "Left-to-Right Embedding (U+202A)" },
    InvisibleCharDef { code_point: '\u{202B}', name: "Right-to-Left Embedding (U+202B)" },
    InvisibleCharDef { code_point: '\u{202C}', name: "Pop Directional Formatting (U+202C)" },
    InvisibleCharDef { code_point: '\u{202D}', name: "Left-to-Right Override (U+202D)" },
    InvisibleCharDef { code_point: '\u{202E}', name: "Right-to-Left Override (U+202E)" },
    // === INVISIBLE MATH OPERATORS ===
    InvisibleCharDef { code_point: '\u{2061}', name: "Function Application (U+2061)" },
    InvisibleCharDef { code_point: '\u{2062}', name: "Invisible Times (U+2062)" },
    InvisibleCharDef { code_point: '\u{2063}', name: "Invisible Separator (U+2063)" },
    InvisibleCharDef { code_point: '\u{2064}', name: "Invisible Plus (U+2064)" },
    // === OTHER FORMAT CONTROLS ===
    InvisibleCharDef { code_point: '\u{034F}', name: "Combining Grapheme Joiner (U+034F)" },
    InvisibleCharDef { code_point: '\u{061C}', name: "Arabic Letter Mark (U+061C)" },
    InvisibleCharDef { code_point: '\u{00AD}', name: "Soft Hyphen (U+00AD)" },
    InvisibleCharDef { code_point: '\u{2009}', name: "Thin Space (U+2009)" },
];

static BY_CODE_POINT: Lazy<HashMap<char, &'static InvisibleCharDef>> = Lazy::new(|| {
    INVISIBLE_CHARS
        .iter()
        .map(|def| (def.code_point, def))
        .collect()
});

/// Looks up a scalar value in the registry.
#[must_use]
pub fn lookup(c: char) -> Option<&'static InvisibleCharDef> {
    BY_CODE_POINT.get(&c).copied()
}

/// Returns true if `c` is one of the registered invisible characters.
#[must_use]
pub fn is_invisible(c: char) -> bool {
    BY_CODE_POINT.contains_key(&c)
}

/// Checks the registry's structural invariants: no code point appears twice
/// and every name carries its own `U+XXXX` label.
///
/// # Errors
/// Returns a description of the first offending entry.
pub fn verify_injective() -> Result<(), String> {
    if BY_CODE_POINT.len() != INVISIBLE_CHARS.len() {
        return Err(format!(
            "registry has {} entries but only {} distinct code points",
            INVISIBLE_CHARS.len(),
            BY_CODE_POINT.len()
        ));
    }
    for def in INVISIBLE_CHARS {
        let label = format!("({})", def.code_label());
        if !def.name.ends_with(&label) {
            return Err(format!("'{}' does not end with {label}", def.name));
        }
    }
    Ok(())
}
