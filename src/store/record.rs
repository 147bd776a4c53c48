// src/store/record.rs
//! Persisted graph record and its listing view.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::graph::WordGraph;

/// A built graph together with the input that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    /// Fingerprint of `text` and `max_words`.
    pub id: String,
    /// Normalized source text.
    pub text: String,
    /// Effective vertex limit used for the build.
    pub max_words: usize,
    pub graph: WordGraph,
    /// Unix epoch seconds.
    pub created_at: u64,
}

/// Listing view of a record, without the adjacency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub id: String,
    pub text: String,
    pub max_words: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: u64,
}

impl GraphRecord {
    /// Loads a record from a JSON file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read graph record: {}", path.display()))?;
        let record: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse graph record: {}", path.display()))?;
        Ok(record)
    }

    /// Saves the record as pretty JSON.
    ///
    /// # Errors
    /// Returns error if file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store dir: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize record")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write graph record: {}", path.display()))?;
        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            id: self.id.clone(),
            text: self.text.clone(),
            max_words: self.max_words,
            vertex_count: self.graph.vertex_count,
            edge_count: self.graph.edge_count,
            created_at: self.created_at,
        }
    }
}
