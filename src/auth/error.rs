//! Internal error taxonomy for the account workflows.
//!
//! These errors carry enough detail for logs and tests. They are never sent
//! to clients as-is; the HTTP layer collapses them into `ApiError`.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid input: {0}")]
    Validation(&'static str),

    #[error("identity key already registered")]
    DuplicateIdentity,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("hashing error: {0}")]
    Hashing(String),

    #[error("signing error: {0}")]
    Signing(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Faults of the service itself rather than of the caller's input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Hashing(_) | Self::Signing(_) | Self::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_faults_are_flagged() {
        assert!(AuthError::Hashing("x".into()).is_internal());
        assert!(AuthError::Signing("x".into()).is_internal());
        assert!(AuthError::Store(StoreError::Unavailable("down".into())).is_internal());
        assert!(!AuthError::InvalidCredentials.is_internal());
        assert!(!AuthError::DuplicateIdentity.is_internal());
        assert!(!AuthError::InvalidToken("bad".into()).is_internal());
        assert!(!AuthError::Validation("empty").is_internal());
    }

    #[test]
    fn store_duplicate_displays_cause() {
        let err = AuthError::from(StoreError::Duplicate);
        assert_eq!(err.to_string(), "store error: identity key already exists");
    }
}
