//! Signed access tokens (HS256 JWT).
//!
//! A token is `header.payload.signature`, base64url encoded. The signature is
//! an HMAC-SHA256 over `header.payload` keyed with the signing secret, so a
//! token only verifies with the secret that issued it and any modified byte
//! invalidates it. Nothing is persisted; verification is recomputed on every
//! request.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identity key of the account.
    pub sub: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    #[must_use]
    pub fn new(identity_key: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: identity_key.to_string(),
            iat: now,
            exp: now.saturating_add(ttl_seconds),
        }
    }
}

/// Sign `claims` with `signing_secret`.
///
/// # Errors
/// Returns `AuthError::Signing` if the claims cannot be encoded.
pub fn issue(claims: &Claims, signing_secret: &[u8]) -> Result<String, AuthError> {
    let key = EncodingKey::from_secret(signing_secret);
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &key)
        .map_err(|e| AuthError::Signing(format!("JWT encode: {e}")))
}

/// Verify `token` against `signing_secret` and return its claims unchanged.
///
/// # Errors
/// Returns `AuthError::InvalidToken` if the token is malformed, the signature
/// does not match, the payload cannot be decoded, or it has expired.
pub fn verify(token: &str, signing_secret: &[u8]) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(signing_secret);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["sub", "exp"]);

    jsonwebtoken::decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

/// Issues and verifies tokens with one configured secret and lifetime.
#[derive(Clone, Debug)]
pub struct TokenIssuer {
    signing_secret: SecretString,
    ttl_seconds: i64,
}

impl TokenIssuer {
    #[must_use]
    pub fn new(signing_secret: SecretString, ttl_seconds: i64) -> Self {
        Self {
            signing_secret,
            ttl_seconds,
        }
    }

    /// Issue a token bound to `identity_key`.
    ///
    /// # Errors
    /// Returns `AuthError::Signing` if encoding fails.
    pub fn issue_for(&self, identity_key: &str) -> Result<String, AuthError> {
        let claims = Claims::new(identity_key, self.ttl_seconds);
        issue(&claims, self.signing_secret.expose_secret().as_bytes())
    }

    /// # Errors
    /// Returns `AuthError::InvalidToken` for any token that does not verify.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        verify(token, self.signing_secret.expose_secret().as_bytes())
    }
}
