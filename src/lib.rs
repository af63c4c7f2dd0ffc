//! Bike rental backend
//!
//! CRUD over bikes and customers plus username/password registration and
//! login, served as JSON over HTTP with Axum and stored in a single SQLite
//! file through SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration, constants and messages
//! - **domain**: Core entities and the password value object
//! - **services**: Use cases behind traits
//! - **infra**: Connection pool, schema initializer and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create tables, then start the server
//! cargo run -- serve
//!
//! # Only create the tables
//! cargo run -- init-db
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Bike, Customer, Password, User};
pub use errors::{AppError, AppResult};
pub use infra::Database;
