// src/lib.rs
//! Word co-occurrence graphs built from free-form text, and the classic
//! graph analyses run over them.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod graph;
pub mod store;
pub mod text;
