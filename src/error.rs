// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the loading and lookup boundary.
//!
//! Searching itself never fails. A query that matches nothing, a feed without
//! items, an item without show notes: all of these are just fewer results.
//! What can fail is getting a library into memory and resolving a scope id.

use crate::types::{FeedId, ItemId};
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} not found")]
    FeedNotFound(FeedId),

    #[error("duplicate {0} in library")]
    DuplicateFeed(FeedId),

    #[error("duplicate {item} in {feed} (already listed in {first})")]
    DuplicateItem {
        item: ItemId,
        feed: FeedId,
        first: FeedId,
    },
}
