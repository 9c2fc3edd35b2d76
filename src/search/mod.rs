// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked field search over a library snapshot.
//!
//! A search walks the fields in a fixed order and scores every field that
//! contains the query:
//!
//! ```text
//! feed titles ─▶ item titles ─▶ chapter titles ─▶ descriptions ─▶ content
//!  (unscoped      (all feeds, or only the scoped feed, from here on)
//!   only)
//! ```
//!
//! Each stage is its own scan producing its own list. The lists are
//! concatenated in that order and stably sorted by descending score. An item
//! can show up several times, once per field that matched; the content guard
//! (see [`ContentGuard`]) is the only de-duplication.

pub mod matching;
mod result;
mod scan;

pub use result::{Component, SearchResult};

use crate::config::{ContentGuard, SearchConfig, SearchOptions};
use crate::contracts::{check_results, check_scope_listed};
use crate::error::{Error, Result};
use crate::labels::Labels;
use crate::scoring::ranking::rank_results;
use crate::scoring::MatchCategory;
use crate::store::Snapshot;
use crate::types::{Feed, FeedId, Item};
use matching::FieldMatcher;
use scan::ScanContext;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

/// Searches library snapshots with fixed options and labels.
///
/// Holds no library state between calls; the same searcher can be shared
/// across threads and pointed at any snapshot.
#[derive(Debug, Clone, Default)]
pub struct FeedSearcher {
    options: SearchOptions,
    labels: Labels,
}

impl FeedSearcher {
    pub fn new(options: SearchOptions, labels: Labels) -> Self {
        Self { options, labels }
    }

    pub fn from_config(config: SearchConfig) -> Self {
        Self::new(config.options, config.labels)
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Search every feed of `snapshot`, or only `scope`'s items.
    ///
    /// With a scope, feed titles are not searched at all, including the
    /// scoped feed's own title. A blank query returns nothing.
    ///
    /// `scope` must be one of `snapshot`'s feeds (checked in debug builds);
    /// use [`FeedSearcher::search_in`] to scope by id.
    pub fn search<'a>(
        &self,
        snapshot: &'a Snapshot,
        query: &str,
        scope: Option<&'a Feed>,
    ) -> Vec<SearchResult<'a>> {
        if let Some(feed) = scope {
            check_scope_listed(snapshot, feed);
        }
        if query.trim().is_empty() {
            debug!("blank query, skipping search");
            return Vec::new();
        }

        let matcher = FieldMatcher::new(query, self.options.fold_diacritics);
        let ctx = ScanContext {
            matcher: &matcher,
            labels: &self.labels,
        };

        let feed_titles = match scope {
            None => {
                debug!(feeds = snapshot.len(), "performing global search");
                scan::scan_feed_titles(snapshot.feeds(), &ctx)
            }
            Some(feed) => {
                debug!(feed = %feed.id, "performing search on a single feed");
                Vec::new()
            }
        };
        log_stage(MatchCategory::FeedTitle, feed_titles.len());

        let feeds: Vec<&'a Feed> = match scope {
            Some(feed) => vec![feed],
            None => snapshot.feeds().iter().collect(),
        };

        let item_titles = scan::scan_item_titles(&feeds, &ctx);
        log_stage(MatchCategory::ItemTitle, item_titles.len());

        let chapters = scan::scan_item_chapters(&feeds, &ctx);
        log_stage(MatchCategory::ItemChapterTitle, chapters.len());

        let descriptions = scan::scan_item_descriptions(&feeds, &ctx);
        log_stage(MatchCategory::ItemDescription, descriptions.len());

        // Keyed on the record itself: ids are only unique in a validated library.
        let guarded: HashSet<*const Item> = match self.options.content_guard {
            ContentGuard::Description => matched_items(&descriptions).collect(),
            ContentGuard::AnyMatch => matched_items(&item_titles)
                .chain(matched_items(&chapters))
                .chain(matched_items(&descriptions))
                .collect(),
            ContentGuard::Off => HashSet::new(),
        };
        let content = scan::scan_item_content(&feeds, &ctx, |item| {
            guarded.contains(&(item as *const Item))
        });
        log_stage(MatchCategory::ItemContent, content.len());

        let mut results = Vec::with_capacity(
            feed_titles.len() + item_titles.len() + chapters.len() + descriptions.len() + content.len(),
        );
        results.extend(feed_titles);
        results.extend(item_titles);
        results.extend(chapters);
        results.extend(descriptions);
        results.extend(content);

        rank_results(&mut results);
        check_results(&results, scope.is_some());

        debug!(results = results.len(), "search complete");
        results
    }

    /// Like [`FeedSearcher::search`], resolving the scope by id in `snapshot`.
    pub fn search_in<'a>(
        &self,
        snapshot: &'a Snapshot,
        query: &str,
        scope: Option<FeedId>,
    ) -> Result<Vec<SearchResult<'a>>> {
        let scope = match scope {
            Some(id) => Some(snapshot.feed(id).ok_or(Error::FeedNotFound(id))?),
            None => None,
        };
        Ok(self.search(snapshot, query, scope))
    }
}

fn matched_items<'r>(results: &'r [SearchResult<'_>]) -> impl Iterator<Item = *const Item> + 'r {
    results
        .iter()
        .filter_map(|r| r.item())
        .map(|item| item as *const Item)
}

fn log_stage(category: MatchCategory, hits: usize) {
    debug!(category = category.as_str(), hits, "scanned");
}

/// Search with default options and English labels.
///
/// Equivalent to `FeedSearcher::default().search(snapshot, query, scope)`.
pub fn search<'a>(snapshot: &'a Snapshot, query: &str, scope: Option<&'a Feed>) -> Vec<SearchResult<'a>> {
    static DEFAULT: OnceLock<FeedSearcher> = OnceLock::new();
    DEFAULT
        .get_or_init(FeedSearcher::default)
        .search(snapshot, query, scope)
}
