//! Registration, authentication and access workflows.
//!
//! `AuthService` is built once from `AuthConfig` and shared behind an `Arc`.
//! It owns no mutable state; durable state lives in the `AccountStore`.
//! Argon2 work runs on tokio's blocking pool so slow hashes don't stall
//! other requests.

use axum::http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tokio::task;
use tracing::{debug, info, instrument};

use super::{
    config::AuthConfig,
    credentials::Credentials,
    error::AuthError,
    gate,
    password::CredentialHasher,
    token::{Claims, TokenIssuer},
};
use crate::store::{Account, AccountStore, StoreError};

pub struct AuthService {
    store: Arc<dyn AccountStore>,
    hasher: CredentialHasher,
    tokens: TokenIssuer,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("store", &self.store.kind())
            .field("hasher", &self.hasher)
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl AuthService {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>, config: &AuthConfig) -> Self {
        Self {
            store,
            hasher: CredentialHasher::new(
                config.password_pepper().cloned(),
                config.hash_params().clone(),
            ),
            tokens: TokenIssuer::new(
                config.signing_secret().clone(),
                config.token_ttl_seconds(),
            ),
        }
    }

    #[must_use]
    pub fn store(&self) -> &dyn AccountStore {
        self.store.as_ref()
    }

    /// Create an account for `credentials`.
    ///
    /// # Errors
    /// `Validation` for empty fields, `DuplicateIdentity` if the key is taken,
    /// `Hashing`/`Store` for internal faults.
    #[instrument(skip(self, credentials), fields(identity_key = %credentials.identity_key))]
    pub async fn register(&self, credentials: Credentials) -> Result<Account, AuthError> {
        credentials.validate()?;

        let secret_hash = self.hash_blocking(credentials.secret).await?;

        let account = self
            .store
            .create_unique(&credentials.identity_key, &secret_hash)
            .await
            .map_err(|err| match err {
                StoreError::Duplicate => AuthError::DuplicateIdentity,
                other => AuthError::Store(other),
            })?;

        info!(account_id = %account.id, "account registered");

        Ok(account)
    }

    /// Check `credentials` and issue an access token.
    ///
    /// Unknown identity keys and wrong secrets both fail with
    /// `InvalidCredentials`.
    ///
    /// # Errors
    /// `InvalidCredentials` on any credential mismatch, `Hashing`, `Signing`
    /// or `Store` for internal faults.
    #[instrument(skip(self, credentials), fields(identity_key = %credentials.identity_key))]
    pub async fn authenticate(&self, credentials: Credentials) -> Result<String, AuthError> {
        if let Err(err) = credentials.validate() {
            debug!("rejecting login: {err}");
            return Err(AuthError::InvalidCredentials);
        }

        let Some(account) = self.store.find_by_key(&credentials.identity_key).await? else {
            debug!("unknown identity key");
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .verify_blocking(credentials.secret, account.secret_hash)
            .await?
        {
            debug!("secret mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue_for(&account.identity_key)?;

        info!(account_id = %account.id, "token issued");

        Ok(token)
    }

    /// Admit a request whose `Authorization` header carries a valid token.
    ///
    /// # Errors
    /// Returns `InvalidToken` if the token is missing or does not verify.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        gate::admit(headers, &self.tokens)
    }

    async fn hash_blocking(&self, secret: SecretString) -> Result<String, AuthError> {
        let hasher = self.hasher.clone();
        task::spawn_blocking(move || hasher.hash(secret.expose_secret()))
            .await
            .map_err(|e| AuthError::Hashing(format!("hashing task failed: {e}")))?
    }

    async fn verify_blocking(
        &self,
        secret: SecretString,
        secret_hash: String,
    ) -> Result<bool, AuthError> {
        let hasher = self.hasher.clone();
        task::spawn_blocking(move || hasher.verify(secret.expose_secret(), &secret_hash))
            .await
            .map_err(|e| AuthError::Hashing(format!("verification task failed: {e}")))?
    }
}
