// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding for comparison.
//!
//! Both the query and every candidate field go through the same fold before
//! comparison, so "Daily News" and "NEWS" meet as "daily news" and "news".
//! Whitespace is left alone: collapsing it would let "a  b" match "a b",
//! which a plain substring test never does.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Lowercase `value`, optionally stripping diacritics first.
///
/// With `fold_diacritics`:
/// - "café" → "cafe"
/// - "naïve" → "naive"
#[cfg(feature = "unicode-normalization")]
pub fn fold(value: &str, fold_diacritics: bool) -> String {
    if fold_diacritics {
        value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_lowercase()
    } else {
        value.to_lowercase()
    }
}

/// Lowercase only. Diacritic folding needs the `unicode-normalization` feature,
/// so the flag is ignored here.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(value: &str, _fold_diacritics: bool) -> String {
    value.to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Whether `c` counts as part of a word for whole-word matching.
///
/// Combining marks belong to the letter they follow, so decomposed "café"
/// (`cafe` + U+0301) is one word, not "cafe" and a stray accent.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_combining_mark(c)
}
