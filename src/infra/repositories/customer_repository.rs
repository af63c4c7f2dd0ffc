//! Customer repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use super::entities::customer::{self, ActiveModel, Entity as CustomerEntity};
use crate::config::MSG_CUSTOMER_EXISTS;
use crate::domain::Customer;
use crate::errors::{AppResult, DbErrExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a customer; a duplicate id is a `Conflict`
    async fn create(&self, customer: Customer) -> AppResult<Customer>;

    /// All customers in storage order
    async fn list(&self) -> AppResult<Vec<Customer>>;

    /// Overwrite name and contact, returning whether a row matched
    async fn update_details(&self, id: &str, name: String, contact: String) -> AppResult<bool>;

    /// Delete a customer, returning whether a row matched
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of CustomerRepository
pub struct CustomerStore {
    db: DatabaseConnection,
}

impl CustomerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn create(&self, customer: Customer) -> AppResult<Customer> {
        let active_model = ActiveModel {
            id: Set(customer.id.clone()),
            name: Set(customer.name.clone()),
            contact: Set(customer.contact.clone()),
        };

        CustomerEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .or_conflict(MSG_CUSTOMER_EXISTS)?;

        Ok(customer)
    }

    async fn list(&self) -> AppResult<Vec<Customer>> {
        let models = CustomerEntity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Customer::from).collect())
    }

    async fn update_details(&self, id: &str, name: String, contact: String) -> AppResult<bool> {
        let result = CustomerEntity::update_many()
            .col_expr(customer::Column::Name, Expr::value(name))
            .col_expr(customer::Column::Contact, Expr::value(contact))
            .filter(customer::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = CustomerEntity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::infra::db::{initialize_schema, Database};

    async fn store() -> CustomerStore {
        let db = Database::connect(&Config::in_memory()).await.unwrap();
        initialize_schema(&db).await.unwrap();
        CustomerStore::new(db.get_connection())
    }

    fn jane() -> Customer {
        Customer::new("C1", "Jane Doe", "555-0100")
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let store = store().await;
        store.create(jane()).await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec![jane()]);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_conflict() {
        let store = store().await;
        store.create(jane()).await.unwrap();

        let err = store
            .create(Customer::new("C1", "John Roe", "555-0199"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref msg) if msg == MSG_CUSTOMER_EXISTS));
        assert_eq!(store.list().await.unwrap(), vec![jane()]);
    }

    #[tokio::test]
    async fn test_update_reports_match() {
        let store = store().await;
        store.create(jane()).await.unwrap();

        assert!(store
            .update_details("C1", "Jane Roe".to_string(), "555-0199".to_string())
            .await
            .unwrap());
        assert!(!store
            .update_details("C2", "Jane Roe".to_string(), "555-0199".to_string())
            .await
            .unwrap());
        assert_eq!(
            store.list().await.unwrap(),
            vec![Customer::new("C1", "Jane Roe", "555-0199")]
        );
    }

    #[tokio::test]
    async fn test_delete_reports_match() {
        let store = store().await;
        store.create(jane()).await.unwrap();

        assert!(store.delete("C1").await.unwrap());
        assert!(!store.delete("C1").await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }
}
