//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AuthService, BikeService, CustomerService, ServiceContainer, Services,
};

/// Application state shared by every handler.
///
/// Cloning is cheap: everything is behind an `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Bike service
    pub bike_service: Arc<dyn BikeService>,
    /// Customer service
    pub customer_service: Arc<dyn CustomerService>,
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Database pool, used directly by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state with services backed by `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());
        Self::new(&services, database)
    }

    /// Create application state from an existing service container.
    pub fn new(services: &impl ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            bike_service: services.bikes(),
            customer_service: services.customers(),
            auth_service: services.auth(),
            database,
        }
    }
}
