//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mealtime catalog and ordering API
#[derive(Parser, Debug)]
#[command(name = "mealtime")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog seed file (YAML)
    #[arg(short, long, global = true, default_value = "catalog.yaml")]
    pub catalog: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Validate a catalog seed file
    Validate,

    /// Print cash accounting totals
    Summary {
        /// Limit accounting to a single day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
}
