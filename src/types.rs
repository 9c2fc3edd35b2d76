// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a library is made of.
//!
//! A [`Feed`] owns an ordered list of [`Item`]s (episodes), and an item may own
//! an ordered list of [`Chapter`]s. The searcher only ever reads these; it never
//! builds or edits them.
//!
//! # Invariants
//!
//! - **Item**: `item.feed_id == feed.id` for the feed whose `items` holds it.
//!   `Feed::push_item` and `Feed::adopt_items` are the only ways the store wires
//!   this up, and the loader always calls `adopt_items`.
//!
//! - **Ids**: feed ids are unique within a library, item ids are unique across
//!   the whole library (not just within a feed). `Library` enforces both.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES: Type-safe identifiers
// =============================================================================

/// Stable feed identifier.
///
/// Opaque to the searcher apart from scope lookup.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FeedId(pub u64);

impl FeedId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for FeedId {
    fn from(id: u64) -> Self {
        FeedId(id)
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feed#{}", self.0)
    }
}

/// Stable item identifier, unique across the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// A named segment inside an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub title: String,
    /// Offset of the chapter mark from the start of the episode.
    #[serde(default)]
    pub start_ms: Option<u64>,
}

impl Chapter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_ms: None,
        }
    }
}

/// A single entry in a feed, usually an episode.
///
/// `description` and `content_encoded` are both show notes: the first is the
/// plain summary, the second the long-form (often HTML) body from the feed's
/// `content:encoded` element. Either may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    /// Back-reference to the owning feed. Assigned by the feed, not the loader.
    #[serde(skip)]
    pub(crate) feed_id: FeedId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content_encoded: Option<String>,
    #[serde(default)]
    pub chapters: Option<Vec<Chapter>>,
}

impl Item {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            feed_id: FeedId(0),
            title: title.into(),
            description: None,
            content_encoded: None,
            chapters: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content_encoded = Some(content.into());
        self
    }

    pub fn with_chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = Some(chapters);
        self
    }

    /// The feed this item belongs to.
    #[inline]
    pub fn feed_id(&self) -> FeedId {
        self.feed_id
    }

    /// Chapters, or an empty slice when the item has none.
    pub fn chapters(&self) -> &[Chapter] {
        self.chapters.as_deref().unwrap_or(&[])
    }
}

/// A podcast feed: a title and its items in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub id: FeedId,
    pub title: String,
    #[serde(default)]
    items: Vec<Item>,
}

impl Feed {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: FeedId(id),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Builder form of [`Feed::push_item`].
    pub fn with_item(mut self, item: Item) -> Self {
        self.push_item(item);
        self
    }

    /// Append an item, pointing its back-reference at this feed.
    pub fn push_item(&mut self, mut item: Item) {
        item.feed_id = self.id;
        self.items.push(item);
    }

    /// Re-point every item's back-reference at this feed.
    ///
    /// Deserialized items come in without a back-reference; the store calls
    /// this before a feed becomes visible to readers.
    pub fn adopt_items(&mut self) {
        let id = self.id;
        for item in &mut self.items {
            item.feed_id = id;
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Keep only items matching `predicate`, returning how many were dropped.
    pub fn retain_items(&mut self, predicate: impl FnMut(&Item) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(predicate);
        before - self.items.len()
    }
}
