// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Every hit is worth the base score of the field it landed in, plus a flat
//! bonus when the query appears as a whole word. The bonus is larger than the
//! gap between any two bases, so a whole-word hit in show notes (4) outranks a
//! bare substring hit in a feed title (3).

mod core;
pub mod ranking;

pub use self::core::*;
