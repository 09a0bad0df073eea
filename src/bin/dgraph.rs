//! CLI entry point for the `dgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use dgraph::cli::commands;
use dgraph::graph::TraversalOrder;
use dgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "dgraph",
    about = "dgraph CLI: query a directed graph loaded from an edge-list file"
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
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Print every vertex with its outgoing edges
    Show {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Out- and in-degree of a vertex
    Degree {
        /// Path to the edge-list file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Outgoing edges of a vertex, in insertion order
    Neighbors {
        /// Path to the edge-list file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Vertices with an edge into the given vertex
    Predecessors {
        /// Path to the edge-list file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Weight of the edge origin -> destination
    Weight {
        /// Path to the edge-list file
        file: PathBuf,
        /// Origin vertex
        origin: String,
        /// Destination vertex
        destination: String,
    },
    /// Visitation order of a traversal from a start vertex
    Traverse {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Order: dfs or bfs
        #[arg(long, default_value = "dfs")]
        order: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Show { file } => commands::cmd_show(&file, json),
        Commands::Degree { file, vertex } => commands::cmd_degree(&file, &vertex, json),
        Commands::Neighbors { file, vertex } => commands::cmd_neighbors(&file, &vertex, json),
        Commands::Predecessors { file, vertex } => {
            commands::cmd_predecessors(&file, &vertex, json)
        }
        Commands::Weight {
            file,
            origin,
            destination,
        } => commands::cmd_weight(&file, &origin, &destination, json),
        Commands::Traverse { file, start, order } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, &start, order, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            _ => 5,
        };
        process::exit(code);
    }
}
