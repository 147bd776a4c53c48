// src/config.rs
//! Settings loaded from `wordgraph.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{CONFIG_FILE, MAX_N, STORE_DIR};
use crate::error::{GraphError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub store: StoreConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Vertex limit used when none is given on the command line.
    pub max_words: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { max_words: MAX_N }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `wordgraph.toml` from the working directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            debug!("no {CONFIG_FILE}, using defaults");
            Ok(Self::new())
        }
    }

    /// Loads settings from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses TOML content; missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns error on malformed TOML or mistyped values.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.graph.max_words, MAX_N);
        assert_eq!(c.store.dir, PathBuf::from(STORE_DIR));
        assert!(c.output.pretty);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let c = Config::parse("[graph]\nmax_words = 25\n").unwrap();
        assert_eq!(c.graph.max_words, 25);
        assert_eq!(c.store, StoreConfig::default());
        assert!(c.output.pretty);
    }

    #[test]
    fn test_malformed_is_error() {
        assert!(Config::parse("[graph]\nmax_words = \"many\"\n").is_err());
    }
}
