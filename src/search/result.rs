// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What a search hands back.

use crate::scoring::{score, MatchCategory, MatchKind};
use crate::types::{Feed, FeedId, Item};
use std::sync::Arc;

/// The record a hit points at.
///
/// Chapter hits point at the item that owns the chapter, not the chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component<'a> {
    Feed(&'a Feed),
    Item(&'a Item),
}

impl<'a> Component<'a> {
    pub fn title(&self) -> &'a str {
        match self {
            Component::Feed(feed) => &feed.title,
            Component::Item(item) => &item.title,
        }
    }

    /// The feed this record is or belongs to.
    pub fn feed_id(&self) -> FeedId {
        match self {
            Component::Feed(feed) => feed.id,
            Component::Item(item) => item.feed_id(),
        }
    }
}

/// One hit: a record, its score, and where the query was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    pub component: Component<'a>,
    pub score: u8,
    pub category: MatchCategory,
    pub kind: MatchKind,
    /// Label for the field family; `None` for feed title hits.
    pub subtitle: Option<Arc<str>>,
}

impl<'a> SearchResult<'a> {
    /// Build a result, deriving the score from category and match kind.
    pub fn new(
        component: Component<'a>,
        category: MatchCategory,
        kind: MatchKind,
        subtitle: Option<Arc<str>>,
    ) -> Self {
        Self {
            component,
            score: score(category, kind),
            category,
            kind,
            subtitle,
        }
    }

    pub fn item(&self) -> Option<&'a Item> {
        match self.component {
            Component::Item(item) => Some(item),
            Component::Feed(_) => None,
        }
    }

    pub fn feed(&self) -> Option<&'a Feed> {
        match self.component {
            Component::Feed(feed) => Some(feed),
            Component::Item(_) => None,
        }
    }

    pub fn title(&self) -> &'a str {
        self.component.title()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }
}
