// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Everything here has a default that reproduces the stock ranking, so an
//! empty `{}` config file is valid.

use crate::error::{Error, Result};
use crate::labels::Labels;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// When to skip an item's encoded content scan.
///
/// Descriptions and encoded content are usually two renderings of the same
/// show notes, so a query that hits one tends to hit the other. The guard
/// decides whether the second hit is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentGuard {
    /// Skip the content scan for items whose description already matched.
    #[default]
    Description,
    /// Skip the content scan for items already present in any earlier result
    /// (item title, chapter or description hit).
    AnyMatch,
    /// Always scan content, reporting description and content hits separately.
    Off,
}

/// Knobs for a single searcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub content_guard: ContentGuard,
    /// Strip diacritics before comparing ("cafe" finds "Café").
    /// Needs the `unicode-normalization` feature; ignored without it.
    pub fold_diacritics: bool,
}

/// On-disk configuration: options plus subtitle labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub options: SearchOptions,
    pub labels: Labels,
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
