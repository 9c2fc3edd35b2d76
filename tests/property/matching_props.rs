//! The match-and-score rule against a regex oracle.

use super::{query_strategy, text_strategy, word_strategy};
use feedsift::{find_match, MatchKind};
use proptest::prelude::*;
use regex::Regex;

/// Oracle: for a query made of word characters, "whole word" is exactly
/// `\b<query>\b`. Only valid when the query starts and ends with a word
/// character, which `word_strategy` guarantees.
fn oracle(text: &str, query: &str) -> Option<MatchKind> {
    let pattern = format!(r"\b{}\b", regex::escape(query));
    let word = Regex::new(&pattern).unwrap();
    if word.is_match(text) {
        Some(MatchKind::Word)
    } else if text.contains(query) {
        Some(MatchKind::Substring)
    } else {
        None
    }
}

/// Words joined by separators that include a bare combining acute accent,
/// the shape of decomposed (NFD) text.
fn decomposed_text_strategy() -> impl Strategy<Value = String> {
    let sep = prop::sample::select(vec![" ", "\u{301}", "\u{301} ", "-"]);
    prop::collection::vec((word_strategy(), sep), 1..8).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, sep)| format!("{}{}", word, sep))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_word_queries_agree_with_regex(text in text_strategy(), query in word_strategy()) {
        prop_assert_eq!(find_match(&text, &query), oracle(&text, &query));
    }

    #[test]
    fn prop_decomposed_text_agrees_with_regex(text in decomposed_text_strategy(), query in word_strategy()) {
        prop_assert_eq!(find_match(&text, &query), oracle(&text, &query));
    }

    #[test]
    fn prop_query_taken_from_text_always_matches(text in text_strategy(), start in 0usize..40, len in 1usize..6) {
        let start = start % text.len();
        let end = (start + len).min(text.len());
        let query = &text[start..end];
        prop_assert!(find_match(&text, query).is_some());
    }

    #[test]
    fn prop_match_iff_contains(text in text_strategy(), query in query_strategy()) {
        let result = find_match(&text, &query);
        prop_assert_eq!(result.is_some(), !query.is_empty() && text.contains(query.as_str()));
    }

    #[test]
    fn prop_whole_text_is_a_word(query in query_strategy()) {
        prop_assume!(!query.is_empty());
        prop_assert_eq!(find_match(&query, &query), Some(MatchKind::Word));
    }

    #[test]
    fn prop_padding_with_spaces_keeps_a_word(query in word_strategy(), left in text_strategy(), right in text_strategy()) {
        let text = format!("{} {} {}", left, query, right);
        prop_assert_eq!(find_match(&text, &query), Some(MatchKind::Word));
    }
}
