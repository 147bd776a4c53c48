// src/graph/types.rs
//! Value types produced by the builder and the analyses.
//!
//! Maps are `BTreeMap`s so that every iteration over vertices is
//! lexicographic, which keeps algorithm output reproducible.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Adjacency list keyed by vertex label.
pub type Adjacency = BTreeMap<String, Vec<Edge>>;

/// A weighted, directed half of a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to: String,
    pub weight: f64,
}

impl Edge {
    #[must_use]
    pub fn new(to: impl Into<String>, weight: f64) -> Self {
        Self {
            to: to.into(),
            weight,
        }
    }
}

/// Word co-occurrence graph.
///
/// Undirected in meaning, stored as two mirrored directed edges.
/// Algorithms only ever borrow it immutably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordGraph {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Vertex label -> occurrence count in the source text.
    pub word_frequencies: BTreeMap<String, usize>,
    pub adjacency: Adjacency,
}

impl WordGraph {
    #[must_use]
    pub fn new(word_frequencies: BTreeMap<String, usize>, adjacency: Adjacency) -> Self {
        let edge_count = adjacency.values().map(Vec::len).sum();
        Self {
            vertex_count: adjacency.len(),
            edge_count,
            word_frequencies,
            adjacency,
        }
    }

    /// Builds a graph directly from undirected weighted edges, mirroring
    /// each one. Vertices are the edge endpoints; frequencies are unknown
    /// and recorded as zero.
    #[must_use]
    pub fn from_edges(edges: &[(&str, &str, f64)]) -> Self {
        let mut adjacency = Adjacency::new();
        for &(u, v, weight) in edges {
            adjacency.entry(u.to_string()).or_default().push(Edge::new(v, weight));
            adjacency.entry(v.to_string()).or_default().push(Edge::new(u, weight));
        }
        let word_frequencies = adjacency.keys().map(|v| (v.clone(), 0)).collect();
        Self::new(word_frequencies, adjacency)
    }

    #[must_use]
    pub fn contains(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Outgoing edges of `vertex`; empty for unknown vertices.
    #[must_use]
    pub fn neighbors(&self, vertex: &str) -> &[Edge] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or_default()
    }

    /// Weight of the edge `from -> to`, if present.
    #[must_use]
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }

    /// Vertex labels in lexicographic order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }
}

/// Result of a traversal or a shortest-path query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub weight: f64,
    pub sequence: Vec<String>,
}

impl Path {
    #[must_use]
    pub fn new(weight: f64, sequence: Vec<String>) -> Self {
        Self { weight, sequence }
    }
}

/// Spanning tree (or forest) over a `WordGraph`.
///
/// Each vertex maps to at most one edge pointing at its tree parent.
/// Roots map to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub total_weight: f64,
    pub adjacency: Adjacency,
}

impl SpanningTree {
    /// Builds a tree from parent links, summing the accepted weights.
    #[must_use]
    pub fn from_parents<'a, I>(vertices: I, parents: &BTreeMap<String, Edge>) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let adjacency: Adjacency = vertices
            .into_iter()
            .map(|v| (v.to_string(), parents.get(v).cloned().into_iter().collect()))
            .collect();
        let total_weight = parents.values().map(|e| e.weight).sum();
        Self {
            total_weight,
            adjacency,
        }
    }

    /// Parent edge of `vertex`, or `None` for roots and unknown vertices.
    #[must_use]
    pub fn parent(&self, vertex: &str) -> Option<&Edge> {
        self.adjacency.get(vertex).and_then(|edges| edges.first())
    }

    /// Number of accepted tree edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Shortest paths from one source to every other reachable vertex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleSourceShortestPaths {
    pub source: String,
    pub paths: BTreeMap<String, Path>,
}

impl SingleSourceShortestPaths {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            paths: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn distance(&self, destination: &str) -> Option<f64> {
        self.paths.get(destination).map(|p| p.weight)
    }
}
