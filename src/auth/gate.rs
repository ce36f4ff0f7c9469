//! Access-control gate: pull the token off a request and verify it.
//!
//! The token travels in the `Authorization` header, either bare or as
//! `Bearer <token>`. Admission only means the token is valid; there is no
//! role or permission check.

use axum::http::{HeaderMap, header::AUTHORIZATION};

use super::{
    error::AuthError,
    token::{Claims, TokenIssuer},
};

const BEARER_SCHEME: &str = "bearer";

/// Extract the token string from the `Authorization` header, if any.
#[must_use]
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();

    // A scheme counts only when followed by whitespace or nothing.
    let token = match (value.get(..BEARER_SCHEME.len()), value.get(BEARER_SCHEME.len()..)) {
        (Some(scheme), Some(rest))
            if scheme.eq_ignore_ascii_case(BEARER_SCHEME)
                && (rest.is_empty() || rest.starts_with(char::is_whitespace)) =>
        {
            rest.trim_start()
        }
        _ => value,
    };

    if token.is_empty() { None } else { Some(token) }
}

/// Admit a request carrying a valid token, returning its claims.
///
/// # Errors
/// Returns `AuthError::InvalidToken` if the token is missing or does not verify.
pub fn admit(headers: &HeaderMap, tokens: &TokenIssuer) -> Result<Claims, AuthError> {
    let token = extract_token(headers)
        .ok_or_else(|| AuthError::InvalidToken("missing authorization header".to_string()))?;

    tokens.verify(token)
}
