// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the single-field match rule.
//!
//! Arbitrary text and query, including multibyte and pattern characters.
//! The rule must agree with plain containment and never slice mid-character.

#![no_main]

use arbitrary::Arbitrary;
use feedsift::{find_match, MatchKind};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    query: String,
}

fuzz_target!(|input: Input| {
    let result = find_match(&input.text, &input.query);

    let contained = !input.query.is_empty() && input.text.contains(input.query.as_str());
    assert_eq!(result.is_some(), contained);

    if input.text == input.query && !input.query.is_empty() {
        assert_eq!(result, Some(MatchKind::Word));
    }
});
