// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on search output.
//!
//! Debug-mode assertions that run after every search. Zero-cost in release
//! builds (`debug_assert!`), loud in tests.
//!
//! | Contract                    | Property                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `check_results_ranked`      | scores never increase down the list             |
//! | `check_score_consistent`    | score = category base + word bonus, within 0..=7 |
//! | `check_scope_respected`     | no feed title hits in a scoped search           |
//! | `check_scope_listed`        | the scope feed is one of the snapshot's feeds   |

use crate::scoring::ranking::is_ranked;
use crate::scoring::{score, MatchCategory, MAX_SCORE};
use crate::search::{Component, SearchResult};
use crate::store::Snapshot;
use crate::types::Feed;

/// Run every contract over a finished result list.
#[inline]
pub fn check_results(results: &[SearchResult<'_>], scoped: bool) {
    check_results_ranked(results);
    for result in results {
        check_score_consistent(result);
    }
    if scoped {
        check_scope_respected(results);
    }
}

/// Results must be sorted by descending score.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_results_ranked(results: &[SearchResult<'_>]) {
    debug_assert!(
        is_ranked(results),
        "Contract violation: results not in descending score order: {:?}",
        results.iter().map(|r| r.score).collect::<Vec<_>>()
    );
}

/// A result's score must follow from its category and match kind, and the
/// record it points at must fit the category.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_score_consistent(result: &SearchResult<'_>) {
    debug_assert!(
        result.score <= MAX_SCORE,
        "Contract violation: score {} > {}",
        result.score,
        MAX_SCORE
    );
    debug_assert_eq!(
        result.score,
        score(result.category, result.kind),
        "Contract violation: score does not match {:?}/{:?}",
        result.category,
        result.kind
    );
    debug_assert_eq!(
        matches!(result.component, Component::Feed(_)),
        result.category.targets_feed(),
        "Contract violation: {:?} result points at the wrong record kind",
        result.category
    );
}

/// Scoped searches never report feed titles.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_scope_respected(results: &[SearchResult<'_>]) {
    debug_assert!(
        results
            .iter()
            .all(|r| r.category != MatchCategory::FeedTitle),
        "Contract violation: feed title hit in a scoped search"
    );
}

/// A scope must be a feed of the searched snapshot, not an equal copy.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_scope_listed(snapshot: &Snapshot, scope: &Feed) {
    debug_assert!(
        snapshot
            .feeds()
            .iter()
            .any(|feed| std::ptr::eq(feed, scope)),
        "Contract violation: scope {} is not listed in the snapshot",
        scope.id
    );
}
