//! Password value object - hashing and verification.
//!
//! Argon2id with a fresh random salt per hash. Verification goes through
//! `PasswordVerifier`, which compares digests in constant time.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

use crate::errors::{AppError, AppResult};

/// Hash used to burn the same verification time when a username is unknown.
static DUMMY: Lazy<Option<Password>> = Lazy::new(|| Password::new("dummy-password").ok());

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// No strength policy is applied; any present value is accepted.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    /// Run a verification that always fails, costing as much as a real one.
    pub fn verify_dummy(plain_text: &str) {
        if let Some(dummy) = DUMMY.as_ref() {
            let _ = dummy.verify(plain_text);
        }
    }

    /// [`Password::new`] on the blocking thread pool.
    ///
    /// Argon2 is CPU-bound and must not run on the async workers.
    pub async fn hash_blocking(plain_text: String) -> AppResult<Self> {
        tokio::task::spawn_blocking(move || Self::new(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Password hash task failed: {}", e)))?
    }

    /// [`Password::verify`] on the blocking thread pool.
    pub async fn verify_blocking(&self, plain_text: String) -> AppResult<bool> {
        let password = self.clone();
        tokio::task::spawn_blocking(move || password.verify(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Password verify task failed: {}", e)))
    }

    /// [`Password::verify_dummy`] on the blocking thread pool.
    pub async fn verify_dummy_blocking(plain_text: String) -> AppResult<()> {
        tokio::task::spawn_blocking(move || Self::verify_dummy(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Password verify task failed: {}", e)))
    }

    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}
