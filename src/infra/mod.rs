//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - SQLite connection pool and raw statement primitives
//! - Schema initialization
//! - Repositories over the SeaORM entities

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{
    BikeRepository, BikeStore, CustomerRepository, CustomerStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockBikeRepository, MockCustomerRepository, MockUserRepository};
