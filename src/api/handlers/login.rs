use axum::{Json, extract::Extension};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::types::{ErrorResponse, TokenResponse};
use crate::{
    api::{
        error::ApiError,
        extract::{Payload, PayloadRejection},
    },
    auth::{AuthService, Credentials},
};

#[utoipa::path(
    post,
    path= "/login",
    request_body(
        content = Credentials,
        description = "JSON or form-encoded identity key and secret",
        content_type = "application/json"
    ),
    responses (
        (status = 200, description = "Login successful", body = TokenResponse, content_type = "application/json"),
        (status = 401, description = "Unknown identity key or wrong secret", body = ErrorResponse),
        (status = 500, description = "Internal failure", body = ErrorResponse),
    ),
    tag= "accounts"
)]
// axum handler for login
#[instrument(skip(service, payload))]
pub async fn login(
    service: Extension<Arc<AuthService>>,
    payload: Result<Payload<Credentials>, PayloadRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let credentials = match payload {
        Ok(Payload(credentials)) => credentials,
        Err(rejection) => {
            debug!("Invalid login payload: {}", rejection);
            return Err(ApiError::InvalidCredentials);
        }
    };

    service
        .authenticate(credentials)
        .await
        .map(|token| Json(TokenResponse { token }))
        .map_err(|err| {
            if err.is_internal() {
                error!("Login failed: {}", err);
            } else {
                debug!("Login rejected: {}", err);
            }
            ApiError::authentication(&err)
        })
}
