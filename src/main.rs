// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use feedsift::{FeedId, FeedSearcher, Library, RecordStore, SearchConfig};

mod cli;
use cli::display::{print_inspect, print_results, ResultRow};
use cli::{Cli, Commands};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("FEEDSIFT_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Search {
            library,
            query,
            feed,
            limit,
            json,
            config,
        } => run_search(&library, &query, feed, limit, json, config.as_deref()),
        Commands::Inspect { library } => run_inspect(&library),
    }
}

fn load_library(path: &Path) -> anyhow::Result<Library> {
    Library::open(path).with_context(|| format!("failed to load library {}", path.display()))
}

fn run_search(
    library: &Path,
    query: &str,
    feed: Option<u64>,
    limit: Option<usize>,
    json: bool,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let library = load_library(library)?;
    let config = match config {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    let searcher = FeedSearcher::from_config(config);

    let snapshot = library.snapshot();
    let mut results = searcher.search_in(&snapshot, query, feed.map(FeedId::from))?;
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if json {
        let rows: Vec<ResultRow<'_>> = results.iter().map(ResultRow::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_results(query, &results, &snapshot);
    }
    Ok(())
}

fn run_inspect(path: &Path) -> anyhow::Result<()> {
    let library = load_library(path)?;
    print_inspect(&path.display().to_string(), &library.snapshot());
    Ok(())
}
