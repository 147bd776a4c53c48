// src/store/graph_store.rs
//! Create, fetch and list graph records under a store root.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::record::{GraphRecord, GraphSummary};
use super::{current_timestamp, is_valid_id, record_file_path, records_path};
use crate::graph::{self, builder::effective_max_words};
use crate::text;

/// Result of [`GraphStore::create`].
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// A record for the same input was already stored.
    Existed(GraphRecord),
    /// The graph was built and saved.
    Created(GraphRecord),
}

impl CreateOutcome {
    #[must_use]
    pub fn record(&self) -> &GraphRecord {
        match self {
            Self::Existed(r) | Self::Created(r) => r,
        }
    }

    #[must_use]
    pub fn into_record(self) -> GraphRecord {
        match self {
            Self::Existed(r) | Self::Created(r) => r,
        }
    }
}

/// Directory of JSON graph records.
pub struct GraphStore {
    root: PathBuf,
}

impl GraphStore {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Builds and saves the graph for `raw_text`, unless an identical input
    /// is already stored.
    ///
    /// # Errors
    /// Returns error if an existing record cannot be read or the new one
    /// cannot be written.
    pub fn create(&self, raw_text: &str, max_words: usize) -> Result<CreateOutcome> {
        let normalized = text::normalize(raw_text);
        let limit = effective_max_words(max_words);
        let id = text::fingerprint(&normalized, limit);

        if let Some(existing) = self.get(&id)? {
            info!(%id, "graph already stored");
            return Ok(CreateOutcome::Existed(existing));
        }

        let record = GraphRecord {
            graph: graph::build(&normalized, limit),
            id,
            text: normalized,
            max_words: limit,
            created_at: current_timestamp(),
        };
        record.save(&record_file_path(&self.root, &record.id))?;
        info!(
            id = %record.id,
            vertices = record.graph.vertex_count,
            edges = record.graph.edge_count,
            "graph stored"
        );
        Ok(CreateOutcome::Created(record))
    }

    /// Fetches a record by id; `None` if it does not exist.
    ///
    /// # Errors
    /// Returns error if the record file exists but cannot be read.
    pub fn get(&self, id: &str) -> Result<Option<GraphRecord>> {
        if !is_valid_id(id) {
            debug!(id, "not a record id");
            return Ok(None);
        }
        let path = record_file_path(&self.root, id);
        if !path.exists() {
            return Ok(None);
        }
        GraphRecord::load(&path).map(Some)
    }

    /// Summaries of every stored record, oldest first.
    ///
    /// # Errors
    /// Returns error if the records directory cannot be read.
    pub fn list(&self) -> Result<Vec<GraphSummary>> {
        let dir = records_path(&self.root);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir)
            .with_context(|| format!("Failed to read store dir: {}", dir.display()))?;
        let mut summaries = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match GraphRecord::load(&path) {
                Ok(record) => summaries.push(record.summary()),
                Err(e) => warn!("skipping unreadable record: {e:#}"),
            }
        }

        summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(summaries)
    }
}
