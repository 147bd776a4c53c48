// src/graph/mst.rs
//! Minimum and maximum spanning trees (Prim and Kruskal).
//!
//! A disconnected graph yields a spanning forest: each component gets its
//! own root with an empty parent list.

use std::cmp::Ordering;
use std::collections::{BTreeMap, VecDeque};

use tracing::debug;

use super::index::VertexIndex;
use super::types::{Edge, SpanningTree, WordGraph};
use super::union_find::DisjointSet;

/// Which extreme of total weight the tree should reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Objective {
    Minimize,
    Maximize,
}

impl Objective {
    fn from_flag(maximize: bool) -> Self {
        if maximize {
            Self::Maximize
        } else {
            Self::Minimize
        }
    }

    fn sentinel(self) -> f64 {
        match self {
            Self::Minimize => f64::INFINITY,
            Self::Maximize => f64::NEG_INFINITY,
        }
    }

    /// True when `candidate` is strictly better than `current`.
    fn improves(self, candidate: f64, current: f64) -> bool {
        match self {
            Self::Minimize => candidate < current,
            Self::Maximize => candidate > current,
        }
    }

    fn order(self, a: f64, b: f64) -> Ordering {
        let ascending = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Self::Minimize => ascending,
            Self::Maximize => ascending.reverse(),
        }
    }
}

/// Prim's algorithm grown from the lexicographically first vertex.
#[must_use]
#[allow(clippy::indexing_slicing)] // Guarded: all indices come from VertexIndex
pub fn prim(graph: &WordGraph, maximize: bool) -> SpanningTree {
    let objective = Objective::from_flag(maximize);
    let index = VertexIndex::new(graph);
    let n = index.len();

    let mut frontier = vec![objective.sentinel(); n];
    let mut parent: Vec<Option<(usize, f64)>> = vec![None; n];
    let mut visited = vec![false; n];
    if !index.is_empty() {
        frontier[0] = 0.0;
    }

    for _ in 0..n {
        let Some(u) = select_best(&frontier, &visited, objective) else {
            break;
        };
        visited[u] = true;

        for edge in graph.neighbors(index.label(u)) {
            let Some(v) = index.position(&edge.to) else {
                continue;
            };
            if !visited[v] && objective.improves(edge.weight, frontier[v]) {
                frontier[v] = edge.weight;
                parent[v] = Some((u, edge.weight));
            }
        }
    }

    let parents: BTreeMap<String, Edge> = parent
        .iter()
        .enumerate()
        .filter_map(|(v, link)| {
            link.map(|(u, w)| (index.label(v).to_string(), Edge::new(index.label(u), w)))
        })
        .collect();

    let tree = SpanningTree::from_parents(index.labels(), &parents);
    debug!(maximize, weight = tree.total_weight, "prim spanning tree");
    tree
}

/// Unvisited vertex with the best frontier value; ties go to the lowest index.
#[allow(clippy::indexing_slicing)]
fn select_best(frontier: &[f64], visited: &[bool], objective: Objective) -> Option<usize> {
    let mut best: Option<usize> = None;
    for v in (0..frontier.len()).filter(|&v| !visited[v]) {
        match best {
            Some(b) if !objective.improves(frontier[v], frontier[b]) => {}
            _ => best = Some(v),
        }
    }
    best
}

/// Kruskal's algorithm over every stored (directed) edge.
///
/// Mirror edges are rejected naturally by the same-set check.
#[must_use]
pub fn kruskal(graph: &WordGraph, maximize: bool) -> SpanningTree {
    let objective = Objective::from_flag(maximize);
    let index = VertexIndex::new(graph);

    let mut candidates: Vec<(usize, usize, f64)> = graph
        .adjacency
        .iter()
        .flat_map(|(from, edges)| edges.iter().map(move |e| (from.as_str(), e)))
        .filter_map(|(from, e)| Some((index.position(from)?, index.position(&e.to)?, e.weight)))
        .collect();
    candidates.sort_by(|a, b| objective.order(a.2, b.2));

    let mut sets = DisjointSet::new(index.len());
    let accepted: Vec<(usize, usize, f64)> = candidates
        .into_iter()
        .filter(|&(u, v, _)| sets.union(u, v))
        .collect();

    let parents = orient(&index, &accepted);
    let tree = SpanningTree::from_parents(index.labels(), &parents);
    debug!(
        maximize,
        weight = tree.total_weight,
        edges = accepted.len(),
        "kruskal spanning tree"
    );
    tree
}

/// Turns an undirected edge set into parent links, rooting each component
/// at its lowest-indexed vertex.
#[allow(clippy::indexing_slicing)]
fn orient(index: &VertexIndex<'_>, accepted: &[(usize, usize, f64)]) -> BTreeMap<String, Edge> {
    let n = index.len();
    let mut tree: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
    for &(u, v, w) in accepted {
        tree[u].push((v, w));
        tree[v].push((u, w));
    }

    let mut parents = BTreeMap::new();
    let mut seen = vec![false; n];
    for root in 0..n {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        let mut queue = VecDeque::from([root]);
        while let Some(u) = queue.pop_front() {
            for &(v, w) in &tree[u] {
                if !seen[v] {
                    seen[v] = true;
                    parents.insert(index.label(v).to_string(), Edge::new(index.label(u), w));
                    queue.push_back(v);
                }
            }
        }
    }
    parents
}
