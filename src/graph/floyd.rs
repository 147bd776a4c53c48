// src/graph/floyd.rs
//! All-pairs shortest paths via Floyd–Warshall.

use tracing::debug;

use super::index::VertexIndex;
use super::types::{Path, SingleSourceShortestPaths, WordGraph};

/// Dense distance and next-hop matrices over a fixed vertex ordering.
pub struct DistanceMatrix<'a> {
    index: VertexIndex<'a>,
    dist: Vec<Vec<f64>>,
    next: Vec<Vec<Option<usize>>>,
}

impl<'a> DistanceMatrix<'a> {
    /// Runs the triple loop over every intermediate vertex.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // Guarded: loops are bounded by n
    pub fn compute(graph: &'a WordGraph) -> Self {
        let index = VertexIndex::new(graph);
        let n = index.len();
        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut next = vec![vec![None; n]; n];

        for i in 0..n {
            dist[i][i] = 0.0;
            for edge in graph.neighbors(index.label(i)) {
                // Self-loops never beat the zero diagonal.
                if let Some(j) = index.position(&edge.to).filter(|&j| j != i) {
                    dist[i][j] = edge.weight;
                    next[i][j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                if !dist[i][k].is_finite() {
                    continue;
                }
                for j in 0..n {
                    // Never sum two sentinels.
                    if !dist[k][j].is_finite() {
                        continue;
                    }
                    let through = dist[i][k] + dist[k][j];
                    if through < dist[i][j] {
                        dist[i][j] = through;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        Self { index, dist, next }
    }

    /// Shortest distance between two labels, `None` if unreachable or unknown.
    #[must_use]
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let i = self.index.position(from)?;
        let j = self.index.position(to)?;
        self.dist
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Walks next hops from `from` to `to`.
    #[must_use]
    pub fn path(&self, from: &str, to: &str) -> Option<Path> {
        let i = self.index.position(from)?;
        let j = self.index.position(to)?;
        self.walk(i, j)
    }

    #[allow(clippy::indexing_slicing)]
    fn walk(&self, i: usize, j: usize) -> Option<Path> {
        self.next[i][j]?;

        let mut sequence = vec![self.index.label(i).to_string()];
        let mut current = i;
        // A simple path never has more than n - 1 hops.
        for _ in 0..self.index.len() {
            if current == j {
                break;
            }
            current = self.next[current][j]?;
            sequence.push(self.index.label(current).to_string());
        }

        (current == j).then(|| Path::new(self.dist[i][j], sequence))
    }

    /// One single-source result per vertex, in vertex order.
    #[must_use]
    pub fn into_paths(self) -> Vec<SingleSourceShortestPaths> {
        let n = self.index.len();
        (0..n)
            .map(|i| {
                let mut sssp = SingleSourceShortestPaths::new(self.index.label(i));
                for j in (0..n).filter(|&j| j != i) {
                    if let Some(path) = self.walk(i, j) {
                        sssp.paths.insert(self.index.label(j).to_string(), path);
                    }
                }
                sssp
            })
            .collect()
    }
}

/// Shortest paths between every ordered pair of vertices.
/// Unreachable pairs are omitted.
#[must_use]
pub fn floyd_warshall(graph: &WordGraph) -> Vec<SingleSourceShortestPaths> {
    let matrix = DistanceMatrix::compute(graph);
    let all = matrix.into_paths();
    debug!(sources = all.len(), "floyd-warshall complete");
    all
}
