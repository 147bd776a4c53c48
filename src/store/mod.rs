// src/store/mod.rs
//! File-backed persistence for built graphs.
//!
//! Sits outside the graph core: records are JSON files named by the
//! fingerprint of their input, so building the same text twice is a lookup.

mod graph_store;
mod record;

pub use graph_store::{CreateOutcome, GraphStore};
pub use record::{GraphRecord, GraphSummary};

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::RECORDS_DIR;

/// Computes the records directory inside a store root.
#[must_use]
pub fn records_path(root: &Path) -> PathBuf {
    root.join(RECORDS_DIR)
}

/// Computes the file holding the record `id`.
#[must_use]
pub fn record_file_path(root: &Path, id: &str) -> PathBuf {
    records_path(root).join(format!("{id}.json"))
}

/// Returns true if `id` has the shape of a fingerprint (64 lowercase hex digits).
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    id.len() == 64 && id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
