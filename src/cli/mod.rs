// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the feedsift command-line interface.
//!
//! Two subcommands: `search` to query a library file and `inspect` to see
//! what is in one. Library files are JSON of the form `{ "feeds": [...] }`.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "feedsift",
    about = "Ranked search over a podcast library",
    version
)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). FEEDSIFT_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a library file and display ranked results
    Search {
        /// Path to the library JSON file
        library: PathBuf,

        /// Search query (case-insensitive, matched literally)
        query: String,

        /// Only search items of the feed with this id; feed titles are skipped
        #[arg(long)]
        feed: Option<u64>,

        /// Maximum number of results to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as a JSON array instead of a table
        #[arg(long)]
        json: bool,

        /// Search configuration file (options and subtitle labels)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Summarize a library file
    Inspect {
        /// Path to the library JSON file
        library: PathBuf,
    },
}
