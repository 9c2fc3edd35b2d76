//! The description/content duplicate guard in each mode.

use crate::common::{hits, item_ids, podcast_library, Hit};
use feedsift::{ContentGuard, FeedSearcher, ItemId, Labels, MatchCategory, SearchOptions};

fn searcher(content_guard: ContentGuard) -> FeedSearcher {
    FeedSearcher::new(
        SearchOptions {
            content_guard,
            ..SearchOptions::default()
        },
        Labels::default(),
    )
}

#[test]
fn test_description_guard_is_default() {
    assert_eq!(
        FeedSearcher::default().options().content_guard,
        ContentGuard::Description
    );
}

#[test]
fn test_description_guard_skips_content_of_described_items() {
    let snapshot = podcast_library();
    let results = searcher(ContentGuard::Description).search(&snapshot, "rust", None);

    // 101 matched in its description, so its content is not reported.
    assert_eq!(
        hits(&results),
        vec![
            Hit::Item(101, MatchCategory::ItemDescription, 4),
            Hit::Item(201, MatchCategory::ItemContent, 4),
            Hit::Item(201, MatchCategory::ItemTitle, 2),
        ]
    );
}

#[test]
fn test_any_match_guard_skips_content_of_any_earlier_hit() {
    let snapshot = podcast_library();
    let results = searcher(ContentGuard::AnyMatch).search(&snapshot, "rust", None);

    // 201 already matched by title.
    assert_eq!(
        hits(&results),
        vec![
            Hit::Item(101, MatchCategory::ItemDescription, 4),
            Hit::Item(201, MatchCategory::ItemTitle, 2),
        ]
    );
}

#[test]
fn test_guard_off_reports_both_show_note_fields() {
    let snapshot = podcast_library();
    let results = searcher(ContentGuard::Off).search(&snapshot, "rust", None);

    assert_eq!(
        hits(&results),
        vec![
            Hit::Item(101, MatchCategory::ItemDescription, 4),
            Hit::Item(101, MatchCategory::ItemContent, 4),
            Hit::Item(201, MatchCategory::ItemContent, 4),
            Hit::Item(201, MatchCategory::ItemTitle, 2),
        ]
    );
    let from_101 = item_ids(&results)
        .into_iter()
        .filter(|id| *id == ItemId(101))
        .count();
    assert_eq!(from_101, 2);
}
