// src/graph/index.rs
//! Dense integer indexing of vertex labels for the matrix and array based
//! algorithms.

use std::collections::HashMap;

use super::types::WordGraph;

/// Fixed lexicographic ordering of a graph's vertices.
pub struct VertexIndex<'a> {
    labels: Vec<&'a str>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> VertexIndex<'a> {
    #[must_use]
    pub fn new(graph: &'a WordGraph) -> Self {
        let labels: Vec<&str> = graph.vertices().collect();
        let positions = labels.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        Self { labels, positions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Label at `position`. Panics on an index not produced by this map.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn label(&self, position: usize) -> &'a str {
        self.labels[position]
    }

    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.labels.iter().copied()
    }
}
