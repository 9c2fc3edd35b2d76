//! Shared test utilities and fixtures.

#![allow(dead_code)]

use feedsift::{Component, FeedId, ItemId, MatchCategory, SearchResult};

// Re-export canonical test utilities from feedsift::testing
pub use feedsift::testing::{make_feed, make_full_item, make_item, make_snapshot, podcast_library};

/// A result reduced to the parts tests compare: record, category, score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Feed(u64, MatchCategory, u8),
    Item(u64, MatchCategory, u8),
}

pub fn hit(result: &SearchResult<'_>) -> Hit {
    match result.component {
        Component::Feed(feed) => Hit::Feed(feed.id.get(), result.category, result.score),
        Component::Item(item) => Hit::Item(item.id.get(), result.category, result.score),
    }
}

pub fn hits(results: &[SearchResult<'_>]) -> Vec<Hit> {
    results.iter().map(hit).collect()
}

/// Ids of every item hit, in result order (repeats kept).
pub fn item_ids(results: &[SearchResult<'_>]) -> Vec<ItemId> {
    results.iter().filter_map(|r| r.item()).map(|item| item.id).collect()
}

/// Assert that scores never increase down the list.
pub fn assert_ranked(results: &[SearchResult<'_>]) {
    for (i, pair) in results.windows(2).enumerate() {
        assert!(
            pair[0].score >= pair[1].score,
            "results not ranked at position {}: {} then {}",
            i,
            pair[0].score,
            pair[1].score
        );
    }
}

pub const DAILY_NEWS: FeedId = FeedId(1);
pub const TECH_TALK: FeedId = FeedId(2);
