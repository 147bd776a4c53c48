// src/constants.rs
//! Shared constants for graph construction and the on-disk store.

/// Upper bound on the number of vertices selected from a text.
/// Also the fallback when a caller asks for zero or too many words.
pub const MAX_N: usize = 100;

/// A token is a maximal run of lowercase alphanumerics, underscores and hyphens.
pub const WORD_PATTERN: &str = r"[a-z0-9_-]+";

/// Characters that terminate a sentence.
pub const SENTENCE_DELIMITERS: &[char] = &['.', '!', '?'];

/// Default directory for persisted graph records.
pub const STORE_DIR: &str = ".wordgraph";

/// Subdirectory of the store holding one JSON file per record.
pub const RECORDS_DIR: &str = "graphs";

/// Name of the optional configuration file in the working directory.
pub const CONFIG_FILE: &str = "wordgraph.toml";
