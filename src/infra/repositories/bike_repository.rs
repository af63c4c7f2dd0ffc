//! Bike repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use super::entities::bike::{self, ActiveModel, Entity as BikeEntity};
use crate::config::MSG_BIKE_EXISTS;
use crate::domain::Bike;
use crate::errors::{AppResult, DbErrExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Bike repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BikeRepository: Send + Sync {
    /// Insert a bike; a duplicate id is a `Conflict`
    async fn create(&self, bike: Bike) -> AppResult<Bike>;

    /// All bikes in storage order
    async fn list(&self) -> AppResult<Vec<Bike>>;

    /// Overwrite the model of a bike, returning whether a row matched
    async fn update_model(&self, id: &str, model: String) -> AppResult<bool>;

    /// Delete a bike, returning whether a row matched
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of BikeRepository
pub struct BikeStore {
    db: DatabaseConnection,
}

impl BikeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BikeRepository for BikeStore {
    async fn create(&self, bike: Bike) -> AppResult<Bike> {
        let active_model = ActiveModel {
            id: Set(bike.id.clone()),
            model_name: Set(bike.model.clone()),
        };

        BikeEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .or_conflict(MSG_BIKE_EXISTS)?;

        Ok(bike)
    }

    async fn list(&self) -> AppResult<Vec<Bike>> {
        let models = BikeEntity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Bike::from).collect())
    }

    async fn update_model(&self, id: &str, model: String) -> AppResult<bool> {
        let result = BikeEntity::update_many()
            .col_expr(bike::Column::ModelName, Expr::value(model))
            .filter(bike::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = BikeEntity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
