//! Bike service - Bike inventory use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MSG_BIKE_NOT_FOUND;
use crate::domain::Bike;
use crate::errors::{AppError, AppResult};
use crate::infra::BikeRepository;

/// Bike service trait for dependency injection.
#[async_trait]
pub trait BikeService: Send + Sync {
    /// Register a new bike under a client-chosen id
    async fn create_bike(&self, id: String, model: String) -> AppResult<Bike>;

    /// List every bike
    async fn list_bikes(&self) -> AppResult<Vec<Bike>>;

    /// Replace the model of an existing bike
    async fn update_bike(&self, id: String, model: String) -> AppResult<Bike>;

    /// Remove a bike
    async fn delete_bike(&self, id: String) -> AppResult<()>;
}

/// Concrete implementation of BikeService.
pub struct BikeManager {
    bikes: Arc<dyn BikeRepository>,
}

impl BikeManager {
    pub fn new(bikes: Arc<dyn BikeRepository>) -> Self {
        Self { bikes }
    }
}

#[async_trait]
impl BikeService for BikeManager {
    async fn create_bike(&self, id: String, model: String) -> AppResult<Bike> {
        let bike = self.bikes.create(Bike::new(id, model)).await?;
        tracing::info!(bike_id = %bike.id, "Bike added");
        Ok(bike)
    }

    async fn list_bikes(&self) -> AppResult<Vec<Bike>> {
        self.bikes.list().await
    }

    async fn update_bike(&self, id: String, model: String) -> AppResult<Bike> {
        if !self.bikes.update_model(&id, model.clone()).await? {
            return Err(AppError::not_found(MSG_BIKE_NOT_FOUND));
        }
        tracing::info!(bike_id = %id, "Bike updated");
        Ok(Bike::new(id, model))
    }

    async fn delete_bike(&self, id: String) -> AppResult<()> {
        if !self.bikes.delete(&id).await? {
            return Err(AppError::not_found(MSG_BIKE_NOT_FOUND));
        }
        tracing::info!(bike_id = %id, "Bike deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MSG_BIKE_EXISTS;
    use crate::infra::MockBikeRepository;

    fn service(repo: MockBikeRepository) -> BikeManager {
        BikeManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_passes_values_through_unchanged() {
        let mut repo = MockBikeRepository::new();
        repo.expect_create().times(1).returning(Ok);

        let bike = service(repo)
            .create_bike(" B1 ".to_string(), "Roadster ".to_string())
            .await
            .unwrap();
        assert_eq!(bike, Bike::new(" B1 ", "Roadster "));
    }

    #[tokio::test]
    async fn test_create_propagates_conflict() {
        let mut repo = MockBikeRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::conflict(MSG_BIKE_EXISTS)));

        let err = service(repo)
            .create_bike("B1".to_string(), "Roadster".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_missing_bike_is_not_found() {
        let mut repo = MockBikeRepository::new();
        repo.expect_update_model().times(1).returning(|_, _| Ok(false));

        let err = service(repo)
            .update_bike("B9".to_string(), "Cruiser".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == MSG_BIKE_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_returns_new_record() {
        let mut repo = MockBikeRepository::new();
        repo.expect_update_model()
            .returning(|id, model| Ok(id == "B1" && model == "Cruiser"));

        let bike = service(repo)
            .update_bike("B1".to_string(), "Cruiser".to_string())
            .await
            .unwrap();
        assert_eq!(bike, Bike::new("B1", "Cruiser"));
    }

    #[tokio::test]
    async fn test_delete_missing_bike_is_not_found() {
        let mut repo = MockBikeRepository::new();
        repo.expect_delete().returning(|id| Ok(id == "B1"));
        let service = service(repo);

        assert!(service.delete_bike("B1".to_string()).await.is_ok());
        assert!(matches!(
            service.delete_bike("B2".to_string()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
