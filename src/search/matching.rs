// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match-and-score rule for a single field.
//!
//! Two tiers, tried in order:
//!
//! 1. **Whole word**: the query occurs with a non-word character (or the edge
//!    of the text) on both sides. Worth the word bonus.
//! 2. **Substring**: the query occurs anywhere. Worth the base score only.
//!
//! The query is user text, not a pattern. Nothing here compiles it into a
//! regex: we find literal occurrences with `str::find` and look at the
//! characters around each one. "c++", "(", "\b" and "a.b" are all just
//! strings to look for.

use crate::scoring::MatchKind;
use crate::util::normalize::{fold, is_word_char};

/// Classify how `needle` occurs in `haystack`, if at all.
///
/// Both sides must already be folded. Every occurrence is considered,
/// overlapping ones included, so "aa" in "aaa b aa" is still a word match.
/// An empty needle never matches.
pub fn find_match(haystack: &str, needle: &str) -> Option<MatchKind> {
    if needle.is_empty() {
        return None;
    }

    let mut found = false;
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        found = true;

        if is_boundary_before(haystack, start) && is_boundary_after(haystack, end) {
            return Some(MatchKind::Word);
        }

        // Step one character, not one byte, so the next slice stays on a
        // char boundary.
        let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
        from = start + step;
    }

    found.then_some(MatchKind::Substring)
}

#[inline]
fn is_boundary_before(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().map_or(true, |c| !is_word_char(c))
}

#[inline]
fn is_boundary_after(text: &str, end: usize) -> bool {
    text[end..].chars().next().map_or(true, |c| !is_word_char(c))
}

/// A query folded once and tested against many fields.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    needle: String,
    fold_diacritics: bool,
}

impl FieldMatcher {
    pub fn new(query: &str, fold_diacritics: bool) -> Self {
        Self {
            needle: fold(query, fold_diacritics),
            fold_diacritics,
        }
    }

    /// The folded query.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Fold `text` the same way as the query and classify the match.
    pub fn match_field(&self, text: &str) -> Option<MatchKind> {
        find_match(&fold(text, self.fold_diacritics), &self.needle)
    }
}
