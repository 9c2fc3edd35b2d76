//! Queries and records at the edges.

use crate::common::{hits, make_feed, make_item, make_snapshot, podcast_library, Hit};
use feedsift::{search, MatchCategory, MatchKind};

#[test]
fn test_empty_and_blank_queries() {
    let snapshot = podcast_library();
    for query in ["", " ", "\t", "  \n "] {
        assert!(search(&snapshot, query, None).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_query_whitespace_is_significant() {
    let snapshot = make_snapshot(vec![make_feed(1, "Daily News", vec![])]);
    assert_eq!(search(&snapshot, "daily news", None)[0].score, 7);
    assert!(search(&snapshot, " news ", None).is_empty());
}

#[test]
fn test_pattern_characters_in_queries() {
    let snapshot = make_snapshot(vec![make_feed(
        1,
        "Feed",
        vec![
            make_item(1, "Learning C++ in a weekend"),
            make_item(2, "What is f(x)?"),
            make_item(3, "Only $5 a month"),
            make_item(4, "[Bonus] episode"),
            make_item(5, "a.b testing"),
        ],
    )]);

    let cases = [
        ("c++", 1, MatchKind::Word),
        ("(", 2, MatchKind::Substring),
        ("f(x)", 2, MatchKind::Word),
        ("$5", 3, MatchKind::Word),
        ("[bon", 4, MatchKind::Substring),
        ("[bonus", 4, MatchKind::Word),
        ("[bonus]", 4, MatchKind::Word),
        ("a.b", 5, MatchKind::Word),
    ];
    for (query, item, kind) in cases {
        let results = search(&snapshot, query, None);
        assert_eq!(results.len(), 1, "query {:?}", query);
        assert_eq!(
            results[0].item().map(|i| i.id.get()),
            Some(item),
            "query {:?}",
            query
        );
        assert_eq!(results[0].kind, kind, "query {:?}", query);
    }
}

#[test]
fn test_regex_metacharacters_do_not_act_as_patterns() {
    let snapshot = make_snapshot(vec![make_feed(1, "Daily News", vec![])]);
    for query in [".*", "n.ws", "\\bnews\\b", "news|daily", "^daily"] {
        assert!(search(&snapshot, query, None).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_unicode_titles() {
    let snapshot = make_snapshot(vec![make_feed(
        1,
        "Ça va",
        vec![make_item(1, "Über alles"), make_item(2, "ポッドキャスト入門")],
    )]);

    assert_eq!(search(&snapshot, "ça", None)[0].score, 7);
    assert_eq!(search(&snapshot, "über", None)[0].score, 6);
    assert_eq!(
        hits(&search(&snapshot, "ポッド", None)),
        vec![Hit::Item(2, MatchCategory::ItemTitle, 2)]
    );
}

#[test]
fn test_empty_library_and_empty_feed() {
    let empty = make_snapshot(vec![]);
    assert!(search(&empty, "news", None).is_empty());

    let snapshot = make_snapshot(vec![make_feed(1, "Empty", vec![])]);
    let feed = snapshot.feed(feedsift::FeedId(1)).unwrap();
    assert!(search(&snapshot, "empty", Some(feed)).is_empty());
}

#[test]
fn test_empty_optional_fields_never_match() {
    let snapshot = make_snapshot(vec![make_feed(
        1,
        "Feed",
        vec![make_item(1, "Title").with_description("").with_content("")],
    )]);
    assert!(search(&snapshot, "x", None).is_empty());
}
