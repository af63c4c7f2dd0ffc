//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and repositories to fulfill
//! application use cases. They depend on repository traits so they can
//! be exercised against mocks.

mod auth_service;
mod bike_service;
pub mod container;
mod customer_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, RegisterOutcome};
pub use bike_service::{BikeManager, BikeService};
pub use customer_service::{CustomerManager, CustomerService};
