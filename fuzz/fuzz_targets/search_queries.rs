// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API over a fixed library to
//! verify it never panics and never returns an unranked or mis-scored list.

#![no_main]

use feedsift::testing::podcast_library;
use feedsift::{search, MatchCategory, Snapshot};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fuzz_target!(|query: &[u8]| {
    static LIBRARY: OnceLock<Snapshot> = OnceLock::new();
    let snapshot = LIBRARY.get_or_init(podcast_library);

    let query = String::from_utf8_lossy(query);

    // INVARIANT 1: search() never panics, scoped or not
    let results = search(snapshot, &query, None);

    // INVARIANT 2: descending score order
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "unranked results for {:?}", query);
    }

    // INVARIANT 3: score follows from category and match kind
    for result in &results {
        assert!(result.score <= 7);
        assert_eq!(result.score, result.category.base_score() + result.kind.bonus());
    }

    // INVARIANT 4: blank queries find nothing
    if query.trim().is_empty() {
        assert!(results.is_empty());
    }

    // INVARIANT 5: scoped searches never report feed titles
    for feed in snapshot.feeds() {
        let scoped = search(snapshot, &query, Some(feed));
        assert!(scoped.iter().all(|r| r.category != MatchCategory::FeedTitle));
        assert!(scoped.iter().all(|r| r.component.feed_id() == feed.id));
    }
});
