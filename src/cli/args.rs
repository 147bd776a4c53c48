// src/cli/args.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wordgraph", version, about = "Word co-occurrence graph analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Read settings from this file instead of ./wordgraph.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build (or look up) the graph for a text
    Build(BuildArgs),
    /// List stored graphs
    List,
    /// Print a stored graph
    Show {
        id: String,
    },
    /// Breadth- and/or depth-first traversal
    Traverse {
        id: String,
        #[arg(long, short)]
        start: String,
        /// bfs or dfs; anything else runs both
        #[arg(long, default_value = "")]
        kind: String,
    },
    /// Minimum or maximum spanning tree
    Mst {
        id: String,
        /// prims or kruskals; anything else runs both
        #[arg(long, default_value = "")]
        kind: String,
        /// Maximize total weight instead of minimizing it
        #[arg(long)]
        max: bool,
    },
    /// Dijkstra and/or Floyd-Warshall shortest paths
    ShortestPath {
        id: String,
        #[arg(long, short)]
        start: Option<String>,
        /// dijkstra or floyd-warshall; anything else runs both
        #[arg(long, default_value = "")]
        kind: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Text to analyze
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub text: Option<String>,
    /// Read the text from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
    /// Number of most frequent words to keep as vertices
    #[arg(long)]
    pub max_words: Option<usize>,
}
