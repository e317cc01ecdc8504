//! CLI module
//!
//! Command-line interface for working with a catalog seed.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP API
//! - `validate` - Check a catalog seed file
//! - `summary` - Print cash accounting totals

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{app, serve};
