// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Higher score first, and that is the whole rule. Results with equal scores
//! keep the order the scans produced them in (feed titles, item titles,
//! chapters, descriptions, content; within a category, library order), because
//! the sort is stable.

use crate::search::SearchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking: descending by score.
///
/// Returns `Equal` for equal scores so a stable sort keeps scan order.
#[inline]
pub fn compare_results(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Sort results in place, best first.
pub fn rank_results(results: &mut [SearchResult<'_>]) {
    results.sort_by(compare_results);
}

/// Whether `results` is already in ranked order.
pub fn is_ranked(results: &[SearchResult<'_>]) -> bool {
    results.windows(2).all(|pair| pair[0].score >= pair[1].score)
}
