// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{BuildArgs, Cli, Commands};
pub use handlers::{
    handle_build, handle_list, handle_mst, handle_shortest_path, handle_show, handle_traverse,
};
