//! Authentication service - Registration and password login.
//!
//! There is no session or token model: a successful call only means the
//! password matched.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_INVALID_CREDENTIALS, MSG_PASSWORD_MISMATCH};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A new account was stored
    Created(User),
    /// The username existed and the password matched
    AlreadyRegistered(User),
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a username, or log in if it is already registered with the
    /// same password.
    async fn register(&self, username: String, password: String) -> AppResult<RegisterOutcome>;

    /// Check credentials
    async fn login(&self, username: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, username: String, password: String) -> AppResult<RegisterOutcome> {
        if let Some(user) = self.users.find_by_username(&username).await? {
            if !user.verify_password(password).await? {
                tracing::warn!(%username, "Registration for existing user with wrong password");
                return Err(AppError::unauthorized(MSG_PASSWORD_MISMATCH));
            }
            tracing::info!(%username, "Existing user logged in through registration");
            return Ok(RegisterOutcome::AlreadyRegistered(user));
        }

        let hashed = Password::hash_blocking(password).await?;
        // A concurrent registration of the same name surfaces here as Conflict
        let user = self.users.create(username, hashed).await?;
        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(RegisterOutcome::Created(user))
    }

    async fn login(&self, username: String, password: String) -> AppResult<User> {
        let Some(user) = self.users.find_by_username(&username).await? else {
            // Same hashing cost as a real check so unknown names can't be timed
            Password::verify_dummy_blocking(password).await?;
            tracing::warn!(%username, "Login for unknown user");
            return Err(AppError::unauthorized(MSG_INVALID_CREDENTIALS));
        };

        if !user.verify_password(password).await? {
            tracing::warn!(%username, "Login with wrong password");
            return Err(AppError::unauthorized(MSG_INVALID_CREDENTIALS));
        }

        tracing::info!(user_id = user.id, "User logged in");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MSG_USERNAME_EXISTS;
    use crate::infra::MockUserRepository;

    fn stored_user(username: &str, password: &str) -> User {
        User {
            id: 1,
            username: username.to_string(),
            password: Password::new(password).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_register_new_user_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|username, password| {
                assert_ne!(password.as_str(), "pw1");
                assert!(password.verify("pw1"));
                Ok(User {
                    id: 7,
                    username,
                    password,
                })
            });

        let outcome = Authenticator::new(Arc::new(repo))
            .register("alice".to_string(), "pw1".to_string())
            .await
            .unwrap();
        assert!(matches!(outcome, RegisterOutcome::Created(ref u) if u.id == 7));
    }

    #[tokio::test]
    async fn test_register_existing_user_with_same_password_logs_in() {
        let mut repo = MockUserRepository::new();
        let existing = stored_user("alice", "pw1");
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().never();

        let outcome = Authenticator::new(Arc::new(repo))
            .register("alice".to_string(), "pw1".to_string())
            .await
            .unwrap();
        assert!(matches!(outcome, RegisterOutcome::AlreadyRegistered(_)));
    }

    #[tokio::test]
    async fn test_register_existing_user_with_other_password_is_unauthorized() {
        let mut repo = MockUserRepository::new();
        let existing = stored_user("alice", "pw1");
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().never();

        let err = Authenticator::new(Arc::new(repo))
            .register("alice".to_string(), "other".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(ref msg) if msg == MSG_PASSWORD_MISMATCH));
    }

    #[tokio::test]
    async fn test_register_race_surfaces_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_, _| Err(AppError::conflict(MSG_USERNAME_EXISTS)));

        let err = Authenticator::new(Arc::new(repo))
            .register("alice".to_string(), "pw1".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_login_outcomes() {
        let mut repo = MockUserRepository::new();
        let existing = stored_user("alice", "pw1");
        repo.expect_find_by_username().returning(move |name| {
            Ok((name == "alice").then(|| existing.clone()))
        });
        let service = Authenticator::new(Arc::new(repo));

        assert!(service
            .login("alice".to_string(), "pw1".to_string())
            .await
            .is_ok());
        assert!(matches!(
            service.login("alice".to_string(), "nope".to_string()).await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            service.login("bob".to_string(), "pw1".to_string()).await,
            Err(AppError::Unauthorized(_))
        ));
    }
}
