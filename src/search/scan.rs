// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One pass per field category.
//!
//! Each scan is a pure function from feeds to its own result list. The
//! searcher concatenates them in category order; only the content scan looks
//! at what came before, through the skip predicate it is given.

use super::matching::FieldMatcher;
use super::result::{Component, SearchResult};
use crate::labels::Labels;
use crate::scoring::MatchCategory;
use crate::types::{Feed, Item};

/// Shared inputs for every scan of one search.
pub(crate) struct ScanContext<'m> {
    pub matcher: &'m FieldMatcher,
    pub labels: &'m Labels,
}

/// Feed titles. Only run for unscoped searches.
pub(crate) fn scan_feed_titles<'a>(
    feeds: &'a [Feed],
    ctx: &ScanContext<'_>,
) -> Vec<SearchResult<'a>> {
    let subtitle = ctx.labels.shared(MatchCategory::FeedTitle);
    feeds
        .iter()
        .filter_map(|feed| {
            ctx.matcher.match_field(&feed.title).map(|kind| {
                SearchResult::new(
                    Component::Feed(feed),
                    MatchCategory::FeedTitle,
                    kind,
                    subtitle.clone(),
                )
            })
        })
        .collect()
}

/// Run `fields` over every item of `feeds`, producing one result per
/// matching text. All results point at the item.
pub(crate) fn scan_items<'a, F, I>(
    feeds: &[&'a Feed],
    category: MatchCategory,
    ctx: &ScanContext<'_>,
    fields: F,
) -> Vec<SearchResult<'a>>
where
    F: Fn(&'a Item) -> I,
    I: IntoIterator<Item = &'a str>,
{
    let subtitle = ctx.labels.shared(category);
    let mut results = Vec::new();
    for &feed in feeds {
        for item in feed.items() {
            for text in fields(item) {
                if let Some(kind) = ctx.matcher.match_field(text) {
                    results.push(SearchResult::new(
                        Component::Item(item),
                        category,
                        kind,
                        subtitle.clone(),
                    ));
                }
            }
        }
    }
    results
}

pub(crate) fn scan_item_titles<'a>(
    feeds: &[&'a Feed],
    ctx: &ScanContext<'_>,
) -> Vec<SearchResult<'a>> {
    scan_items(feeds, MatchCategory::ItemTitle, ctx, |item| {
        std::iter::once(item.title.as_str())
    })
}

/// Chapter titles. An item gets one result per matching chapter.
pub(crate) fn scan_item_chapters<'a>(
    feeds: &[&'a Feed],
    ctx: &ScanContext<'_>,
) -> Vec<SearchResult<'a>> {
    scan_items(feeds, MatchCategory::ItemChapterTitle, ctx, |item| {
        item.chapters().iter().map(|chapter| chapter.title.as_str())
    })
}

pub(crate) fn scan_item_descriptions<'a>(
    feeds: &[&'a Feed],
    ctx: &ScanContext<'_>,
) -> Vec<SearchResult<'a>> {
    scan_items(feeds, MatchCategory::ItemDescription, ctx, |item| {
        item.description.as_deref()
    })
}

/// Encoded content, skipping items for which `skip` says so.
pub(crate) fn scan_item_content<'a>(
    feeds: &[&'a Feed],
    ctx: &ScanContext<'_>,
    skip: impl Fn(&Item) -> bool,
) -> Vec<SearchResult<'a>> {
    scan_items(feeds, MatchCategory::ItemContent, ctx, |item| {
        if skip(item) {
            tracing::trace!(item = %item.id, "content scan skipped by guard");
            None
        } else {
            item.content_encoded.as_deref()
        }
    })
}
