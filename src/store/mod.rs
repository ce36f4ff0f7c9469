//! Account persistence.
//!
//! The workflows only need two things from storage: create an account when
//! its identity key is free, and find an account by identity key. Both
//! backends enforce uniqueness atomically, so concurrent registrations of the
//! same key produce exactly one account.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

/// A registered account. `secret_hash` is an Argon2 PHC string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub identity_key: String,
    pub secret_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    #[must_use]
    pub fn new(identity_key: &str, secret_hash: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            identity_key: identity_key.to_string(),
            secret_hash: secret_hash.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("identity key already exists")]
    Duplicate,
    #[error("database error")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account unless `identity_key` is already taken.
    ///
    /// # Errors
    /// Returns `StoreError::Duplicate` on a key collision, or a backend error.
    async fn create_unique(
        &self,
        identity_key: &str,
        secret_hash: &str,
    ) -> Result<Account, StoreError>;

    /// Look up an account by identity key.
    ///
    /// # Errors
    /// Returns a backend error if the lookup itself fails.
    async fn find_by_key(&self, identity_key: &str) -> Result<Option<Account>, StoreError>;

    /// Check that the backend is reachable, used by `/health`.
    ///
    /// # Errors
    /// Returns an error if the backend cannot serve queries.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name for logs and health output.
    fn kind(&self) -> &'static str;
}
