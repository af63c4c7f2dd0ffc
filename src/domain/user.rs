//! User account entity.

use super::Password;
use crate::errors::AppResult;

/// Registered user.
///
/// Intentionally not `Serialize`: the stored hash never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: Password,
}

impl User {
    /// Check a plain text password against the stored hash
    pub async fn verify_password(&self, plain_text: String) -> AppResult<bool> {
        self.password.verify_blocking(plain_text).await
    }
}
