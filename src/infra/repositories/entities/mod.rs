//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod bike;
pub mod customer;
pub mod user;
