// src/analysis.rs
//! Entry points used by the surrounding service layer.
//!
//! Each call takes a borrowed graph plus an algorithm selector and returns
//! a report with one optional slot per algorithm. An empty selector runs
//! every algorithm in the family, as does an unrecognized one.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::graph::{self, Path, SingleSourceShortestPaths, SpanningTree, WordGraph};

pub const START_REQUIRED: &str = "Start vertex is required for Dijkstra's algorithm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    Bfs,
    Dfs,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanningTreeKind {
    Prims,
    Kruskals,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortestPathKind {
    Dijkstra,
    FloydWarshall,
    All,
}

impl From<&str> for TraversalKind {
    /// Unrecognized names fall back to running both traversals.
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "bfs" => Self::Bfs,
            "dfs" => Self::Dfs,
            "" => Self::Both,
            _ => fallback("traversal", s, Self::Both),
        }
    }
}

impl From<&str> for SpanningTreeKind {
    /// Unrecognized names fall back to running both spanning tree algorithms.
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "prims" => Self::Prims,
            "kruskals" => Self::Kruskals,
            "" => Self::Both,
            _ => fallback("spanning tree", s, Self::Both),
        }
    }
}

impl From<&str> for ShortestPathKind {
    /// Unrecognized names fall back to running every shortest path algorithm.
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "dijkstra" => Self::Dijkstra,
            "floyd-warshall" => Self::FloydWarshall,
            "" => Self::All,
            _ => fallback("shortest path", s, Self::All),
        }
    }
}

fn fallback<K>(family: &str, value: &str, kind: K) -> K {
    warn!(family, value, "unknown algorithm kind, running all");
    kind
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfs: Option<Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfs: Option<Path>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanningTreeReport {
    pub maximize: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prims: Option<SpanningTree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kruskals: Option<SpanningTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dijkstra: Option<SingleSourceShortestPaths>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floyd_warshall: Option<Vec<SingleSourceShortestPaths>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Builds a graph from already-normalized text.
#[must_use]
pub fn build_graph(text: &str, max_words: usize) -> WordGraph {
    graph::build(text, max_words)
}

/// Runs BFS and/or DFS from `start`. Unknown start vertices leave the slots empty.
#[must_use]
pub fn traverse(graph: &WordGraph, start: &str, kind: TraversalKind) -> TraversalReport {
    if !graph.contains(start) {
        debug!(start, "traversal start is not a vertex");
    }
    let run_bfs = matches!(kind, TraversalKind::Bfs | TraversalKind::Both);
    let run_dfs = matches!(kind, TraversalKind::Dfs | TraversalKind::Both);

    TraversalReport {
        bfs: run_bfs.then(|| graph::bfs(graph, start)).flatten(),
        dfs: run_dfs.then(|| graph::dfs(graph, start)).flatten(),
    }
}

/// Runs Prim and/or Kruskal with the requested weight direction.
#[must_use]
pub fn spanning_tree(
    graph: &WordGraph,
    kind: SpanningTreeKind,
    maximize: bool,
) -> SpanningTreeReport {
    let run_prims = matches!(kind, SpanningTreeKind::Prims | SpanningTreeKind::Both);
    let run_kruskals = matches!(kind, SpanningTreeKind::Kruskals | SpanningTreeKind::Both);

    SpanningTreeReport {
        maximize,
        prims: run_prims.then(|| graph::prim(graph, maximize)),
        kruskals: run_kruskals.then(|| graph::kruskal(graph, maximize)),
    }
}

/// Runs Dijkstra and/or Floyd–Warshall.
///
/// Whenever Dijkstra is selected a non-blank `start` is required; without
/// one the report carries an error message and nothing is computed.
#[must_use]
pub fn shortest_path(
    graph: &WordGraph,
    start: Option<&str>,
    kind: ShortestPathKind,
) -> ShortestPathReport {
    let start = start.map(str::trim).filter(|s| !s.is_empty());

    if kind == ShortestPathKind::FloydWarshall {
        return ShortestPathReport {
            floyd_warshall: Some(graph::floyd_warshall(graph)),
            ..ShortestPathReport::default()
        };
    }

    let Some(source) = start else {
        warn!("{START_REQUIRED}");
        return ShortestPathReport {
            error: Some(START_REQUIRED.to_string()),
            ..ShortestPathReport::default()
        };
    };

    ShortestPathReport {
        dijkstra: Some(graph::dijkstra(graph, source)),
        floyd_warshall: (kind == ShortestPathKind::All).then(|| graph::floyd_warshall(graph)),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!(TraversalKind::from(""), TraversalKind::Both);
        assert_eq!(TraversalKind::from("BFS"), TraversalKind::Bfs);
        assert_eq!(SpanningTreeKind::from(" kruskals "), SpanningTreeKind::Kruskals);
        assert_eq!(ShortestPathKind::from("Floyd-Warshall"), ShortestPathKind::FloydWarshall);
    }

    #[test]
    fn test_unknown_kind_runs_everything() {
        let cases = [("prim", SpanningTreeKind::Both), ("kruskal", SpanningTreeKind::Both)];
        for (input, expected) in cases {
            assert_eq!(SpanningTreeKind::from(input), expected, "input: {input}");
        }
        assert_eq!(TraversalKind::from("bogus"), TraversalKind::Both);
        assert_eq!(ShortestPathKind::from("astar"), ShortestPathKind::All);
    }
}
