//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::store::{Library, Snapshot};
use crate::types::{Chapter, Feed, Item};

/// Create a feed owning `items`, in order.
pub fn make_feed(id: u64, title: &str, items: Vec<Item>) -> Feed {
    items
        .into_iter()
        .fold(Feed::new(id, title), |feed, item| feed.with_item(item))
}

/// Create an item with only a title.
pub fn make_item(id: u64, title: &str) -> Item {
    Item::new(id, title)
}

/// Create an item with every optional field set.
pub fn make_full_item(
    id: u64,
    title: &str,
    description: &str,
    content: &str,
    chapters: &[&str],
) -> Item {
    Item::new(id, title)
        .with_description(description)
        .with_content(content)
        .with_chapters(chapters.iter().map(|title| Chapter::new(*title)).collect())
}

/// Snapshot of a library built from `feeds`.
///
/// # Panics
/// Panics if the feeds contain duplicate ids.
pub fn make_snapshot(feeds: Vec<Feed>) -> Snapshot {
    use crate::store::RecordStore;
    Library::from_feeds(feeds)
        .expect("fixture feeds must have unique ids")
        .snapshot()
}

/// A small two-feed podcast library used across the test suites.
///
/// | Feed | Item | Title                   | Notes                                   |
/// |------|------|-------------------------|-----------------------------------------|
/// | 1    | 101  | Episode 42              | description + content mention "rust"    |
/// | 1    | 102  | Morning news roundup    | chapters "Headlines", "Weather"         |
/// | 1    | 103  | Subscriber mailbag      | description "subscribe today"           |
/// | 2    | 201  | Rustacean Station       | content "rust" only                     |
/// | 2    | 202  | Interview               | nothing optional                        |
pub fn podcast_library() -> Snapshot {
    make_snapshot(vec![
        make_feed(
            1,
            "Daily News",
            vec![
                Item::new(101, "Episode 42")
                    .with_description("We talk about Rust and the news")
                    .with_content("<p>We talk about <b>Rust</b> and the news</p>"),
                Item::new(102, "Morning news roundup").with_chapters(vec![
                    Chapter::new("Headlines"),
                    Chapter::new("Weather"),
                ]),
                Item::new(103, "Subscriber mailbag").with_description("subscribe today"),
            ],
        ),
        make_feed(
            2,
            "Tech Talk",
            vec![
                Item::new(201, "Rustacean Station").with_content("all about rust"),
                Item::new(202, "Interview"),
            ],
        ),
    ])
}
