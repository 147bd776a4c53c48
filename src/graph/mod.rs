// src/graph/mod.rs
//! Word co-occurrence graph construction and the analyses that run on it.
//!
//! Everything here is pure and synchronous: a `WordGraph` is built once
//! and only ever borrowed immutably by the algorithms.

pub mod builder;
pub mod dijkstra;
pub mod floyd;
pub mod index;
pub mod mst;
pub mod traversal;
pub mod types;
pub mod union_find;

pub use builder::build;
pub use dijkstra::dijkstra;
pub use floyd::{floyd_warshall, DistanceMatrix};
pub use mst::{kruskal, prim};
pub use traversal::{bfs, dfs};
pub use types::{Adjacency, Edge, Path, SingleSourceShortestPaths, SpanningTree, WordGraph};
