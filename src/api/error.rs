//! Client-facing errors.
//!
//! Each variant has one fixed status and message. Internal causes are logged
//! by the handler and never included in the body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::handlers::types::ErrorResponse;
use crate::auth::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to register user")]
    RegistrationFailed,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Failed to login user")]
    AuthenticationFailed,
    #[error("Invalid token")]
    InvalidToken,
}

impl ApiError {
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::RegistrationFailed | Self::AuthenticationFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
        }
    }

    /// Every registration failure looks the same to the client, whether the
    /// key was taken, the input was empty, or the store failed.
    #[must_use]
    pub const fn registration(_err: &AuthError) -> Self {
        Self::RegistrationFailed
    }

    #[must_use]
    pub const fn authentication(err: &AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::Validation(_) => Self::InvalidCredentials,
            _ => Self::AuthenticationFailed,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
