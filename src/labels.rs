// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subtitle strings shown under each hit.
//!
//! The searcher attaches these verbatim. Translating them is the caller's
//! business: load a different [`Labels`] and pass it in.

use crate::scoring::MatchCategory;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One human-readable label per field family.
///
/// Descriptions and encoded content share `found_in_show_notes`. Feed title
/// hits carry no subtitle at all. Strings are shared with every result that
/// uses them, so results do not borrow the searcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub found_in_title: Arc<str>,
    pub found_in_chapters: Arc<str>,
    pub found_in_show_notes: Arc<str>,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            found_in_title: Arc::from("found in title"),
            found_in_chapters: Arc::from("found in chapters"),
            found_in_show_notes: Arc::from("found in show notes"),
        }
    }
}

impl Labels {
    /// Subtitle for a hit in `category`.
    pub fn subtitle(&self, category: MatchCategory) -> Option<&str> {
        self.label(category).map(|label| &**label)
    }

    /// Shared handle to the subtitle, for attaching to results.
    pub(crate) fn shared(&self, category: MatchCategory) -> Option<Arc<str>> {
        self.label(category).map(Arc::clone)
    }

    fn label(&self, category: MatchCategory) -> Option<&Arc<str>> {
        match category {
            MatchCategory::FeedTitle => None,
            MatchCategory::ItemTitle => Some(&self.found_in_title),
            MatchCategory::ItemChapterTitle => Some(&self.found_in_chapters),
            MatchCategory::ItemDescription | MatchCategory::ItemContent => {
                Some(&self.found_in_show_notes)
            }
        }
    }
}
