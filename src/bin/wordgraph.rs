// src/bin/wordgraph.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wordgraph_core::cli::{self, Cli, Commands};
use wordgraph_core::config::Config;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "wordgraph=debug,wordgraph_core=debug"
    } else {
        "wordgraph=info,wordgraph_core=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    dispatch(&config, &cli.command)
}

fn dispatch(config: &Config, cmd: &Commands) -> Result<()> {
    match cmd {
        Commands::Build(args) => cli::handle_build(config, args),
        Commands::List => cli::handle_list(config),
        Commands::Show { id } => cli::handle_show(config, id),
        Commands::Traverse { id, start, kind } => cli::handle_traverse(config, id, start, kind),
        Commands::Mst { id, kind, max } => cli::handle_mst(config, id, kind, *max),
        Commands::ShortestPath { id, start, kind } => {
            cli::handle_shortest_path(config, id, start.as_deref(), kind)
        }
    }
}
