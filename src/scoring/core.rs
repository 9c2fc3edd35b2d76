// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers behind search ranking.
//!
//! # Constants (changing these changes result order for every caller)
//!
//! | Category           | Base | With word bonus |
//! |--------------------|------|-----------------|
//! | `FeedTitle`        | 3    | 7               |
//! | `ItemTitle`        | 2    | 6               |
//! | `ItemChapterTitle` | 1    | 5               |
//! | `ItemDescription`  | 0    | 4               |
//! | `ItemContent`      | 0    | 4               |
//!
//! Content shares the description's base: both are show notes, just from
//! different feed elements.

use serde::{Deserialize, Serialize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Base score for a feed title match.
pub const FEED_TITLE_SCORE: u8 = 3;

/// Base score for an item title match.
pub const ITEM_TITLE_SCORE: u8 = 2;

/// Base score for a chapter title match.
pub const ITEM_CHAPTER_SCORE: u8 = 1;

/// Base score for a show notes match (description or encoded content).
pub const ITEM_DESCRIPTION_SCORE: u8 = 0;

/// Added when the query occurs as a whole word rather than inside one.
pub const WORD_MATCH_BONUS: u8 = 4;

/// Highest score any result can carry.
pub const MAX_SCORE: u8 = FEED_TITLE_SCORE + WORD_MATCH_BONUS;

const _: () = {
    // The bonus must dominate the spread of base scores.
    assert!(WORD_MATCH_BONUS > FEED_TITLE_SCORE - ITEM_DESCRIPTION_SCORE);
    assert!(MAX_SCORE == 7);
};

/// Which field produced a match.
///
/// Declaration order is scan order: feed titles first, encoded content last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchCategory {
    FeedTitle,
    ItemTitle,
    ItemChapterTitle,
    ItemDescription,
    ItemContent,
}

impl MatchCategory {
    /// All categories in scan order.
    pub const ALL: [MatchCategory; 5] = [
        MatchCategory::FeedTitle,
        MatchCategory::ItemTitle,
        MatchCategory::ItemChapterTitle,
        MatchCategory::ItemDescription,
        MatchCategory::ItemContent,
    ];

    /// Base score before any word bonus.
    pub const fn base_score(self) -> u8 {
        match self {
            MatchCategory::FeedTitle => FEED_TITLE_SCORE,
            MatchCategory::ItemTitle => ITEM_TITLE_SCORE,
            MatchCategory::ItemChapterTitle => ITEM_CHAPTER_SCORE,
            MatchCategory::ItemDescription | MatchCategory::ItemContent => ITEM_DESCRIPTION_SCORE,
        }
    }

    /// Feed title hits belong to a feed; everything else to an item.
    pub const fn targets_feed(self) -> bool {
        matches!(self, MatchCategory::FeedTitle)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchCategory::FeedTitle => "feed title",
            MatchCategory::ItemTitle => "item title",
            MatchCategory::ItemChapterTitle => "chapter title",
            MatchCategory::ItemDescription => "description",
            MatchCategory::ItemContent => "content",
        }
    }
}

/// How the query was found in a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    /// Delimited by non-word characters (or the text edges) on both sides.
    Word,
    /// Somewhere in the text, but not as a whole word.
    Substring,
}

impl MatchKind {
    pub const fn bonus(self) -> u8 {
        match self {
            MatchKind::Word => WORD_MATCH_BONUS,
            MatchKind::Substring => 0,
        }
    }
}

/// Final score for a hit: category base plus the word bonus, if any.
#[inline]
pub const fn score(category: MatchCategory, kind: MatchKind) -> u8 {
    category.base_score() + kind.bonus()
}
