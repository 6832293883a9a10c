//! CLI entry point for the `dsag` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use dsa_graphs::cli::commands::{self, Order};
use dsa_graphs::GraphError;

#[derive(Parser)]
#[command(
    name = "dsag",
    about = "dsag: traverse undirected graphs described as JSON documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and edge counts
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Depth-first visitation order from a vertex
    Dfs {
        /// Path to the graph document
        file: PathBuf,
        /// Starting vertex label
        start: String,
    },
    /// Breadth-first visitation order from a vertex
    Bfs {
        /// Path to the graph document
        file: PathBuf,
        /// Starting vertex label
        start: String,
    },
    /// Path with the fewest edges between two vertices
    Path {
        /// Path to the graph document
        file: PathBuf,
        /// Source vertex label
        source: String,
        /// Target vertex label
        target: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Dfs { file, start } => {
            commands::cmd_traverse(&file, &start, Order::DepthFirst, json)
        }
        Commands::Bfs { file, start } => {
            commands::cmd_traverse(&file, &start, Order::BreadthFirst, json)
        }
        Commands::Path {
            file,
            source,
            target,
        } => commands::cmd_path(&file, &source, &target, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::DuplicateVertex(_) => 2,
            GraphError::UnknownVertex(_) => 4,
        };
        process::exit(code);
    }
}
