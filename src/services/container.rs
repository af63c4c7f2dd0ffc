//! Service Container - Centralized service access.
//!
//! Builds every service from one pooled database connection and hands out
//! `Arc`-shared trait objects to the HTTP layer.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AuthService, Authenticator, BikeManager, BikeService, CustomerManager, CustomerService,
};
use crate::infra::{BikeStore, CustomerStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get bike service
    fn bikes(&self) -> Arc<dyn BikeService>;

    /// Get customer service
    fn customers(&self) -> Arc<dyn CustomerService>;

    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    bike_service: Arc<dyn BikeService>,
    customer_service: Arc<dyn CustomerService>,
    auth_service: Arc<dyn AuthService>,
}

impl Services {
    /// Create a service container from already-built services
    pub fn new(
        bike_service: Arc<dyn BikeService>,
        customer_service: Arc<dyn CustomerService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            bike_service,
            customer_service,
            auth_service,
        }
    }

    /// Create service container backed by the SeaORM repositories
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let bikes = Arc::new(BikeStore::new(db.clone()));
        let customers = Arc::new(CustomerStore::new(db.clone()));
        let users = Arc::new(UserStore::new(db));

        Self::new(
            Arc::new(BikeManager::new(bikes)),
            Arc::new(CustomerManager::new(customers)),
            Arc::new(Authenticator::new(users)),
        )
    }
}

impl ServiceContainer for Services {
    fn bikes(&self) -> Arc<dyn BikeService> {
        self.bike_service.clone()
    }

    fn customers(&self) -> Arc<dyn CustomerService> {
        self.customer_service.clone()
    }

    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }
}
