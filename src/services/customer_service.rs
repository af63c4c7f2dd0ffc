//! Customer service - Customer profile use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MSG_CUSTOMER_NOT_FOUND;
use crate::domain::Customer;
use crate::errors::{AppError, AppResult};
use crate::infra::CustomerRepository;

/// Customer service trait for dependency injection.
#[async_trait]
pub trait CustomerService: Send + Sync {
    async fn create_customer(&self, id: String, name: String, contact: String)
        -> AppResult<Customer>;

    async fn list_customers(&self) -> AppResult<Vec<Customer>>;

    /// Replace both name and contact of an existing customer
    async fn update_customer(&self, id: String, name: String, contact: String)
        -> AppResult<Customer>;

    async fn delete_customer(&self, id: String) -> AppResult<()>;
}

/// Concrete implementation of CustomerService.
pub struct CustomerManager {
    customers: Arc<dyn CustomerRepository>,
}

impl CustomerManager {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn create_customer(
        &self,
        id: String,
        name: String,
        contact: String,
    ) -> AppResult<Customer> {
        let customer = self
            .customers
            .create(Customer::new(id, name, contact))
            .await?;
        tracing::info!(customer_id = %customer.id, "Customer added");
        Ok(customer)
    }

    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.customers.list().await
    }

    async fn update_customer(
        &self,
        id: String,
        name: String,
        contact: String,
    ) -> AppResult<Customer> {
        let matched = self
            .customers
            .update_details(&id, name.clone(), contact.clone())
            .await?;
        if !matched {
            return Err(AppError::not_found(MSG_CUSTOMER_NOT_FOUND));
        }
        tracing::info!(customer_id = %id, "Customer updated");
        Ok(Customer::new(id, name, contact))
    }

    async fn delete_customer(&self, id: String) -> AppResult<()> {
        if !self.customers.delete(&id).await? {
            return Err(AppError::not_found(MSG_CUSTOMER_NOT_FOUND));
        }
        tracing::info!(customer_id = %id, "Customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockCustomerRepository;

    #[tokio::test]
    async fn test_update_missing_customer_is_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_update_details()
            .times(1)
            .returning(|_, _, _| Ok(false));

        let err = CustomerManager::new(Arc::new(repo))
            .update_customer("C9".to_string(), "Ann".to_string(), "555".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == MSG_CUSTOMER_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_returns_new_record() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_update_details().returning(|_, _, _| Ok(true));

        let customer = CustomerManager::new(Arc::new(repo))
            .update_customer("C1".to_string(), "Ann".to_string(), "555".to_string())
            .await
            .unwrap();
        assert_eq!(customer, Customer::new("C1", "Ann", "555"));
    }

    #[tokio::test]
    async fn test_list_is_passed_through() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![Customer::new("C1", "Ann", "555")]));

        let customers = CustomerManager::new(Arc::new(repo))
            .list_customers()
            .await
            .unwrap();
        assert_eq!(customers.len(), 1);
    }
}
