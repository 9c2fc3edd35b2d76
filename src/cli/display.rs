// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the feedsift CLI.
//!
//! Plain ANSI styles, off when `NO_COLOR` is set or stdout is not a TTY.

use feedsift::{Component, MatchCategory, MatchKind, SearchResult, Snapshot};
use serde::Serialize;

/// An ANSI style applied to one span of output.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    /// Whole-word hit badge.
    Strong,
    /// Substring hit badge.
    Weak,
    /// Owning feed and headings.
    Accent,
    /// Subtitles and counts.
    Muted,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Strong => "\x1b[1;32m",
            Style::Weak => "\x1b[33m",
            Style::Accent => "\x1b[36m",
            Style::Muted => "\x1b[90m",
        }
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(style: Style, text: &str, colors: bool) -> String {
    if colors {
        format!("{}{}\x1b[0m", style.code(), text)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// One line of human-readable output: score, title, subtitle, owning feed.
pub fn format_result(result: &SearchResult<'_>, snapshot: &Snapshot, colors: bool) -> String {
    let badge_style = match result.kind {
        MatchKind::Word => Style::Strong,
        MatchKind::Substring => Style::Weak,
    };
    let mut line = format!(
        "{}  {}",
        paint(badge_style, &format!("{:>2}", result.score), colors),
        result.title()
    );
    if let Some(subtitle) = result.subtitle() {
        line.push_str(&paint(Style::Muted, &format!("  · {}", subtitle), colors));
    }
    if let Component::Item(item) = result.component {
        if let Some(feed) = snapshot.feed_of(item) {
            line.push_str(&paint(Style::Accent, &format!("  [{}]", feed.title), colors));
        }
    }
    line
}

pub fn print_results(query: &str, results: &[SearchResult<'_>], snapshot: &Snapshot) {
    if results.is_empty() {
        println!("No results for \"{}\"", query);
        return;
    }
    let colors = use_colors();
    for result in results {
        println!("{}", format_result(result, snapshot, colors));
    }
}

/// JSON view of a result, flattened for scripts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow<'r> {
    pub kind: &'static str,
    pub feed_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<u64>,
    pub title: &'r str,
    pub score: u8,
    pub category: MatchCategory,
    pub match_kind: MatchKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'r str>,
}

impl<'r> From<&'r SearchResult<'_>> for ResultRow<'r> {
    fn from(result: &'r SearchResult<'_>) -> Self {
        Self {
            kind: match result.component {
                Component::Feed(_) => "feed",
                Component::Item(_) => "item",
            },
            feed_id: result.component.feed_id().get(),
            item_id: result.item().map(|item| item.id.get()),
            title: result.title(),
            score: result.score,
            category: result.category,
            match_kind: result.kind,
            subtitle: result.subtitle(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

/// Counts of searchable fields in a library.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub feeds: usize,
    pub items: usize,
    pub chapters: usize,
    pub descriptions: usize,
    pub contents: usize,
}

impl LibraryStats {
    pub fn collect(snapshot: &Snapshot) -> Self {
        let mut stats = LibraryStats {
            feeds: snapshot.len(),
            ..Default::default()
        };
        for item in snapshot.feeds().iter().flat_map(|feed| feed.items()) {
            stats.items += 1;
            stats.chapters += item.chapters().len();
            stats.descriptions += usize::from(item.description.is_some());
            stats.contents += usize::from(item.content_encoded.is_some());
        }
        stats
    }

    fn rows(&self) -> [(&'static str, usize); 5] {
        [
            ("feeds", self.feeds),
            ("items", self.items),
            ("chapters", self.chapters),
            ("descriptions", self.descriptions),
            ("encoded content", self.contents),
        ]
    }
}

pub fn print_inspect(path: &str, snapshot: &Snapshot) {
    let colors = use_colors();
    println!("{}", paint(Style::Accent, path, colors));
    for (label, count) in LibraryStats::collect(snapshot).rows() {
        println!("  {:<18}{:>8}", label, count);
    }
    println!();
    for feed in snapshot.feeds() {
        println!(
            "  {:>6}  {} {}",
            feed.id.get(),
            feed.title,
            paint(Style::Muted, &format!("({} items)", feed.items().len()), colors)
        );
    }
}
