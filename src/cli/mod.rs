//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Initialize the schema and start the HTTP server
//! - `init-db` - Create the database tables and exit

pub mod args;

pub use args::{Cli, Commands};
