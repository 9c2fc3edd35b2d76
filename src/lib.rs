//! Ranked multi-field search over an in-memory podcast library.
//!
//! A library is a list of feeds; feeds hold items (episodes); items may hold
//! chapters. Given a free-text query and an optional feed to search inside,
//! [`search`] scans titles, chapter titles and show notes, scores every field
//! that contains the query, and returns the hits best-first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  types.rs   │────▶│  store.rs    │────▶│  search/         │
//! │ (Feed, Item,│     │ (Library,    │     │  (FeedSearcher,  │
//! │  Chapter)   │     │  Snapshot)   │     │   scans, rule)   │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                                                   │
//!        ┌──────────────────────┬───────────────────┤
//!        ▼                      ▼                   ▼
//! ┌─────────────┐     ┌──────────────────┐  ┌──────────────┐
//! │ scoring/    │     │ labels.rs,       │  │ contracts.rs │
//! │ (bases,     │     │ config.rs        │  │ (debug       │
//! │  ranking)   │     │ (subtitles, opts)│  │  invariants) │
//! └─────────────┘     └──────────────────┘  └──────────────┘
//! ```
//!
//! # Scoring
//!
//! | Field           | Base | Whole-word hit |
//! |-----------------|------|----------------|
//! | Feed title      | 3    | 7              |
//! | Item title      | 2    | 6              |
//! | Chapter title   | 1    | 5              |
//! | Show notes      | 0    | 4              |
//!
//! # Usage
//!
//! ```
//! use feedsift::{search, Feed, Item, Library, RecordStore};
//!
//! let library = Library::from_feeds(vec![
//!     Feed::new(1, "Daily News").with_item(Item::new(10, "Episode 42")),
//! ])
//! .unwrap();
//!
//! let snapshot = library.snapshot();
//! let results = search(&snapshot, "news", None);
//! assert_eq!(results[0].score, 7);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod error;
pub mod labels;
pub mod scoring;
pub mod search;
pub mod store;
pub mod testing;
mod types;
mod util;

// Re-exports for public API
pub use config::{ContentGuard, SearchConfig, SearchOptions};
pub use error::{Error, Result};
pub use labels::Labels;
pub use scoring::{MatchCategory, MatchKind, WORD_MATCH_BONUS};
pub use search::matching::find_match;
pub use search::{search, Component, FeedSearcher, SearchResult};
pub use store::{Library, RecordStore, Snapshot};
pub use types::{Chapter, Feed, FeedId, Item, ItemId};
pub use util::normalize::fold;
