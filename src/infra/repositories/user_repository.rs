//! User repository implementation. Users are append-only.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::MSG_USERNAME_EXISTS;
use crate::domain::{Password, User};
use crate::errors::{AppResult, DbErrExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a user; a taken username is a `Conflict`
    async fn create(&self, username: String, password: Password) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn create(&self, username: String, password: Password) -> AppResult<User> {
        let active_model = ActiveModel {
            username: Set(username.clone()),
            password: Set(password.as_str().to_owned()),
            ..Default::default()
        };

        // The UNIQUE constraint settles concurrent registrations of one name
        let result = UserEntity::insert(active_model)
            .exec(&self.db)
            .await
            .or_conflict(MSG_USERNAME_EXISTS)?;

        Ok(User {
            id: result.last_insert_id,
            username,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::infra::db::{initialize_schema, Database};

    async fn store() -> UserStore {
        let db = Database::connect(&Config::in_memory()).await.unwrap();
        initialize_schema(&db).await.unwrap();
        UserStore::new(db.get_connection())
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = store().await;
        let alice = store
            .create("alice".to_string(), Password::new("pw1").unwrap())
            .await
            .unwrap();
        let bob = store
            .create("bob".to_string(), Password::new("pw2").unwrap())
            .await
            .unwrap();

        assert!(bob.id > alice.id);
    }

    #[tokio::test]
    async fn test_find_by_username_returns_stored_hash() {
        let store = store().await;
        store
            .create("alice".to_string(), Password::new("pw1").unwrap())
            .await
            .unwrap();

        let found = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.username, "alice");
        assert!(found.verify_password("pw1".to_string()).await.unwrap());
        assert_ne!(found.password.as_str(), "pw1");

        assert!(store.find_by_username("Alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let store = store().await;
        store
            .create("alice".to_string(), Password::new("pw1").unwrap())
            .await
            .unwrap();

        let err = store
            .create("alice".to_string(), Password::new("pw2").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref msg) if msg == MSG_USERNAME_EXISTS));
    }
}
