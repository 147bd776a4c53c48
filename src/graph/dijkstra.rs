// src/graph/dijkstra.rs
//! Single-source shortest paths via Dijkstra's algorithm.
//!
//! Edge weights are co-occurrence counts, so they are never negative.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::index::VertexIndex;
use super::types::{Path, SingleSourceShortestPaths, WordGraph};

/// Entry in the priority queue.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: f64,
    vertex: usize,
}

impl Eq for QueueEntry {}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the std max-heap pops the smallest distance first.
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest paths from `source` to every reachable vertex.
///
/// An unknown source produces an empty result; callers are expected to
/// validate the source beforehand.
#[must_use]
#[allow(clippy::indexing_slicing)] // Guarded: all indices come from VertexIndex
pub fn dijkstra(graph: &WordGraph, source: &str) -> SingleSourceShortestPaths {
    let mut result = SingleSourceShortestPaths::new(source);
    let index = VertexIndex::new(graph);
    let Some(start) = index.position(source) else {
        return result;
    };

    let n = index.len();
    let mut distance = vec![f64::INFINITY; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut queue = BinaryHeap::new();

    distance[start] = 0.0;
    queue.push(QueueEntry {
        distance: 0.0,
        vertex: start,
    });

    while let Some(QueueEntry { vertex: u, .. }) = queue.pop() {
        // Superseded entries are skipped instead of removed from the heap.
        if finalized[u] {
            continue;
        }
        finalized[u] = true;

        if u != start {
            let sequence = trace_back(&index, &predecessor, start, u);
            result
                .paths
                .insert(index.label(u).to_string(), Path::new(distance[u], sequence));
        }

        for edge in graph.neighbors(index.label(u)) {
            let Some(v) = index.position(&edge.to) else {
                continue;
            };
            let candidate = distance[u] + edge.weight;
            if !finalized[v] && candidate < distance[v] {
                distance[v] = candidate;
                predecessor[v] = Some(u);
                queue.push(QueueEntry {
                    distance: candidate,
                    vertex: v,
                });
            }
        }
    }

    result
}

#[allow(clippy::indexing_slicing)]
fn trace_back(
    index: &VertexIndex<'_>,
    predecessor: &[Option<usize>],
    start: usize,
    target: usize,
) -> Vec<String> {
    let mut sequence = vec![index.label(target).to_string()];
    let mut current = target;
    while current != start {
        let Some(prev) = predecessor[current] else {
            break;
        };
        sequence.push(index.label(prev).to_string());
        current = prev;
    }
    sequence.reverse();
    sequence
}
