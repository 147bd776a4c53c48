// src/cli/handlers.rs
use std::fs;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::info;

use crate::analysis::{self, ShortestPathKind, SpanningTreeKind, TraversalKind};
use crate::cli::args::BuildArgs;
use crate::config::Config;
use crate::store::{CreateOutcome, GraphRecord, GraphStore};

/// Handles the build command.
///
/// # Errors
/// Returns error if the input cannot be read or the record cannot be stored.
pub fn handle_build(config: &Config, args: &BuildArgs) -> Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {}", path.display()))?,
        (None, None) => return Err(anyhow!("either --text or --file is required")),
    };
    let max_words = args.max_words.unwrap_or(config.graph.max_words);

    let outcome = store(config).create(&text, max_words)?;
    if let CreateOutcome::Existed(record) = &outcome {
        info!(id = %record.id, "reusing stored graph");
    }
    print_json(config, outcome.record())
}

/// Handles the list command.
///
/// # Errors
/// Returns error if the store cannot be read.
pub fn handle_list(config: &Config) -> Result<()> {
    print_json(config, &store(config).list()?)
}

/// Handles the show command.
///
/// # Errors
/// Returns error if the record is missing or unreadable.
pub fn handle_show(config: &Config, id: &str) -> Result<()> {
    print_json(config, &load_record(config, id)?)
}

/// Handles the traverse command.
///
/// # Errors
/// Returns error if the record is missing or unreadable.
pub fn handle_traverse(config: &Config, id: &str, start: &str, kind: &str) -> Result<()> {
    let kind = TraversalKind::from(kind);
    let record = load_record(config, id)?;
    print_json(config, &analysis::traverse(&record.graph, start, kind))
}

/// Handles the mst command.
///
/// # Errors
/// Returns error if the record is missing or unreadable.
pub fn handle_mst(config: &Config, id: &str, kind: &str, maximize: bool) -> Result<()> {
    let kind = SpanningTreeKind::from(kind);
    let record = load_record(config, id)?;
    print_json(config, &analysis::spanning_tree(&record.graph, kind, maximize))
}

/// Handles the shortest-path command.
///
/// # Errors
/// Returns error if the record is missing or unreadable.
pub fn handle_shortest_path(
    config: &Config,
    id: &str,
    start: Option<&str>,
    kind: &str,
) -> Result<()> {
    let kind = ShortestPathKind::from(kind);
    let record = load_record(config, id)?;
    print_json(config, &analysis::shortest_path(&record.graph, start, kind))
}

fn store(config: &Config) -> GraphStore {
    GraphStore::new(&config.store.dir)
}

fn load_record(config: &Config, id: &str) -> Result<GraphRecord> {
    store(config)
        .get(id)?
        .ok_or_else(|| anyhow!("no graph with id '{id}'"))
}

fn print_json<T: Serialize>(config: &Config, value: &T) -> Result<()> {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
