//! Invariants of full searches over random libraries.

use super::{query_strategy, text_strategy, word_strategy};
use crate::common::{hits, make_feed, make_full_item, make_snapshot};
use feedsift::{search, ContentGuard, Feed, FeedSearcher, Labels, MatchCategory, SearchOptions};
use proptest::prelude::*;

/// (feed title, items of (title, description, content, chapters))
type FeedShape = (String, Vec<(String, String, String, Vec<String>)>);

fn library_strategy() -> impl Strategy<Value = Vec<FeedShape>> {
    let item = (
        text_strategy(),
        text_strategy(),
        text_strategy(),
        prop::collection::vec(text_strategy(), 0..3),
    );
    let feed = (text_strategy(), prop::collection::vec(item, 0..4));
    prop::collection::vec(feed, 1..4)
}

fn build(shape: &[FeedShape]) -> Vec<Feed> {
    let mut next_item = 0u64;
    shape.iter()
        .enumerate()
        .map(|(feed_id, (title, items))| {
            let items = items
                .iter()
                .map(|(title, description, content, chapters)| {
                    next_item += 1;
                    let chapters: Vec<&str> = chapters.iter().map(String::as_str).collect();
                    make_full_item(next_item, title, description, content, &chapters)
                })
                .collect();
            make_feed(feed_id as u64, title, items)
        })
        .collect()
}

fn any_query() -> impl Strategy<Value = String> {
    prop_oneof![word_strategy(), query_strategy()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_results_ranked_and_bounded(shape in library_strategy(), query in any_query()) {
        let snapshot = make_snapshot(build(&shape));
        let results = search(&snapshot, &query, None);

        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for result in &results {
            prop_assert!(result.score <= 7);
            prop_assert_eq!(result.score, result.category.base_score() + result.kind.bonus());
        }
    }

    #[test]
    fn prop_scoped_search_stays_in_scope(shape in library_strategy(), query in any_query(), pick in 0usize..4) {
        let snapshot = make_snapshot(build(&shape));
        let feed = &snapshot.feeds()[pick % snapshot.len()];
        let results = search(&snapshot, &query, Some(feed));

        for result in &results {
            prop_assert!(result.category != MatchCategory::FeedTitle);
            prop_assert_eq!(result.component.feed_id(), feed.id);
        }
    }

    #[test]
    fn prop_scoped_hits_are_a_subset_of_global(shape in library_strategy(), query in word_strategy()) {
        let snapshot = make_snapshot(build(&shape));
        let global = hits(&search(&snapshot, &query, None));
        for feed in snapshot.feeds() {
            for hit in hits(&search(&snapshot, &query, Some(feed))) {
                prop_assert!(global.contains(&hit));
            }
        }
    }

    #[test]
    fn prop_search_is_idempotent(shape in library_strategy(), query in any_query()) {
        let snapshot = make_snapshot(build(&shape));
        prop_assert_eq!(
            hits(&search(&snapshot, &query, None)),
            hits(&search(&snapshot, &query, None))
        );
    }

    #[test]
    fn prop_guards_only_remove_content_hits(shape in library_strategy(), query in word_strategy()) {
        let snapshot = make_snapshot(build(&shape));
        let with = |content_guard| {
            let searcher = FeedSearcher::new(
                SearchOptions { content_guard, ..SearchOptions::default() },
                Labels::default(),
            );
            let results = searcher.search(&snapshot, &query, None);
            hits(&results)
        };

        let off = with(ContentGuard::Off);
        let description = with(ContentGuard::Description);
        let any = with(ContentGuard::AnyMatch);

        let non_content = |list: &[crate::common::Hit]| -> Vec<crate::common::Hit> {
            list.iter()
                .copied()
                .filter(|hit| !matches!(
                    hit,
                    crate::common::Hit::Item(_, MatchCategory::ItemContent, _)
                ))
                .collect()
        };
        prop_assert_eq!(non_content(&off), non_content(&description));
        prop_assert_eq!(non_content(&off), non_content(&any));
        prop_assert!(any.len() <= description.len());
        prop_assert!(description.len() <= off.len());
    }
}
