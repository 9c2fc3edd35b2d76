// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where feeds live while the application runs.
//!
//! The searcher never talks to a store directly. It asks for a [`Snapshot`]
//! once, at the start of a search, and reads only that. A snapshot is an
//! `Arc` to an immutable feed list, so a writer replacing a feed halfway
//! through a search cannot tear what the search sees.
//!
//! [`Library`] is the in-memory store. Writes are copy-on-write: if no
//! snapshot is outstanding the list is edited in place, otherwise
//! `Arc::make_mut` clones it first and outstanding snapshots keep the old one.

use crate::error::{Error, Result};
use crate::types::{Feed, FeedId, Item, ItemId};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Read-only access to the current feeds.
pub trait RecordStore {
    /// A consistent view of every feed, in listing order.
    fn snapshot(&self) -> Snapshot;
}

/// An immutable view of the library at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    feeds: Arc<Vec<Feed>>,
}

impl Snapshot {
    /// Wrap a feed list, wiring up item back-references.
    ///
    /// No id validation happens here; use [`Library::from_feeds`] for that.
    pub fn new(mut feeds: Vec<Feed>) -> Self {
        feeds.iter_mut().for_each(Feed::adopt_items);
        Self {
            feeds: Arc::new(feeds),
        }
    }

    pub fn feeds(&self) -> &[Feed] {
        &self.feeds
    }

    pub fn feed(&self, id: FeedId) -> Option<&Feed> {
        self.feeds.iter().find(|feed| feed.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.feeds
            .iter()
            .flat_map(|feed| feed.items())
            .find(|item| item.id == id)
    }

    /// The feed an item belongs to.
    pub fn feed_of(&self, item: &Item) -> Option<&Feed> {
        self.feed(item.feed_id())
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.feeds.iter().map(|feed| feed.items().len()).sum()
    }
}

impl RecordStore for Snapshot {
    fn snapshot(&self) -> Snapshot {
        self.clone()
    }
}

/// On-disk layout of a library file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    feeds: Vec<Feed>,
}

/// The in-memory feed store.
#[derive(Debug, Default)]
pub struct Library {
    feeds: RwLock<Arc<Vec<Feed>>>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library, rejecting duplicate feed or item ids.
    pub fn from_feeds(feeds: Vec<Feed>) -> Result<Self> {
        let mut accepted: Vec<Feed> = Vec::with_capacity(feeds.len());
        for mut feed in feeds {
            feed.adopt_items();
            check_insert(&accepted, None, &feed)?;
            accepted.push(feed);
        }
        Ok(Self {
            feeds: RwLock::new(Arc::new(accepted)),
        })
    }

    /// Parse a library from JSON of the form `{ "feeds": [...] }`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LibraryFile = serde_json::from_str(json)?;
        let library = Self::from_feeds(file.feeds)?;
        debug!(
            feeds = library.len(),
            items = library.snapshot().item_count(),
            "loaded library"
        );
        Ok(library)
    }

    /// Load a library file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Serialize the current contents in the format [`Library::from_json_str`] reads.
    pub fn to_json(&self) -> Result<String> {
        let feeds = self.snapshot();
        let file = LibraryFile {
            feeds: feeds.feeds().to_vec(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Append a feed at the end of the listing.
    pub fn add_feed(&self, mut feed: Feed) -> Result<()> {
        feed.adopt_items();
        let mut guard = self.feeds.write();
        check_insert(&guard, None, &feed)?;
        debug!(feed = %feed.id, items = feed.items().len(), "adding feed");
        Arc::make_mut(&mut *guard).push(feed);
        Ok(())
    }

    /// Edit a feed in place. The edit is discarded if it introduces a
    /// duplicate id.
    pub fn update_feed(&self, id: FeedId, edit: impl FnOnce(&mut Feed)) -> Result<()> {
        let mut guard = self.feeds.write();
        let position = guard
            .iter()
            .position(|feed| feed.id == id)
            .ok_or(Error::FeedNotFound(id))?;

        let mut updated = guard[position].clone();
        edit(&mut updated);
        updated.adopt_items();
        check_insert(&guard, Some(position), &updated)?;

        Arc::make_mut(&mut *guard)[position] = updated;
        Ok(())
    }

    /// Remove a feed and hand it back.
    pub fn remove_feed(&self, id: FeedId) -> Result<Feed> {
        let mut guard = self.feeds.write();
        let position = guard
            .iter()
            .position(|feed| feed.id == id)
            .ok_or(Error::FeedNotFound(id))?;
        debug!(feed = %id, "removing feed");
        Ok(Arc::make_mut(&mut *guard).remove(position))
    }

    pub fn len(&self) -> usize {
        self.feeds.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.read().is_empty()
    }
}

impl RecordStore for Library {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            feeds: Arc::clone(&*self.feeds.read()),
        }
    }
}

/// Check that `feed` can sit in `existing` (at `replacing`, if set) without
/// duplicating a feed id or any item id.
fn check_insert(existing: &[Feed], replacing: Option<usize>, feed: &Feed) -> Result<()> {
    let others = existing
        .iter()
        .enumerate()
        .filter(|(position, _)| Some(*position) != replacing)
        .map(|(_, other)| other);

    let mut seen: HashMap<ItemId, FeedId> = HashMap::new();
    for other in others {
        if other.id == feed.id {
            return Err(Error::DuplicateFeed(feed.id));
        }
        for item in other.items() {
            seen.insert(item.id, other.id);
        }
    }

    for item in feed.items() {
        if let Some(first) = seen.insert(item.id, feed.id) {
            return Err(Error::DuplicateItem {
                item: item.id,
                feed: feed.id,
                first,
            });
        }
    }
    Ok(())
}
