// src/graph/traversal.rs
//! Breadth-first and depth-first traversal.
//!
//! Both return the discovery order together with the summed weight of the
//! edges used to reach each newly discovered vertex. An unknown start
//! vertex yields `None`.

use std::collections::{HashSet, VecDeque};

use super::types::{Path, WordGraph};

/// Level-order traversal from `start`.
#[must_use]
pub fn bfs(graph: &WordGraph, start: &str) -> Option<Path> {
    if !graph.contains(start) {
        return None;
    }

    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut queue: VecDeque<&str> = VecDeque::from([start]);
    let mut sequence = Vec::new();
    let mut weight = 0.0;

    while let Some(vertex) = queue.pop_front() {
        sequence.push(vertex.to_string());
        for edge in graph.neighbors(vertex) {
            // Marked on enqueue so a vertex is never queued twice.
            if visited.insert(edge.to.as_str()) {
                weight += edge.weight;
                queue.push_back(edge.to.as_str());
            }
        }
    }

    Some(Path::new(weight, sequence))
}

/// Iterative depth-first traversal from `start`.
#[must_use]
pub fn dfs(graph: &WordGraph, start: &str) -> Option<Path> {
    if !graph.contains(start) {
        return None;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    // The start vertex enters as a zero-weight self edge.
    let mut stack: Vec<(&str, f64)> = vec![(start, 0.0)];
    let mut sequence = Vec::new();
    let mut weight = 0.0;

    while let Some((vertex, edge_weight)) = stack.pop() {
        // A vertex can be pushed more than once via different parents.
        if !visited.insert(vertex) {
            continue;
        }
        sequence.push(vertex.to_string());
        weight += edge_weight;

        for edge in graph.neighbors(vertex) {
            if !visited.contains(edge.to.as_str()) {
                stack.push((edge.to.as_str(), edge.weight));
            }
        }
    }

    Some(Path::new(weight, sequence))
}
