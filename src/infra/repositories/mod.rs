//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! one SQL statement per operation.

mod bike_repository;
mod customer_repository;
pub(crate) mod entities;
mod user_repository;

pub use bike_repository::{BikeRepository, BikeStore};
pub use customer_repository::{CustomerRepository, CustomerStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use bike_repository::MockBikeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
