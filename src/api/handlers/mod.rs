//! HTTP request handlers.

pub mod auth_handler;
pub mod bike_handler;
pub mod customer_handler;
pub mod home_handler;

pub use auth_handler::auth_routes;
pub use bike_handler::bike_routes;
pub use customer_handler::customer_routes;
pub use home_handler::home_routes;
