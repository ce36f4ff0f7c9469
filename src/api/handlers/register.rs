use axum::{Json, extract::Extension};
use std::sync::Arc;
use tracing::{error, instrument, warn};

use super::types::{ErrorResponse, MessageResponse};
use crate::{
    api::{
        error::ApiError,
        extract::{Payload, PayloadRejection},
    },
    auth::{AuthError, AuthService, Credentials},
};

pub const REGISTERED: &str = "User registered successfully";

#[utoipa::path(
    post,
    path= "/register",
    request_body(
        content = Credentials,
        description = "JSON or form-encoded identity key and secret",
        content_type = "application/json"
    ),
    responses (
        (status = 200, description = "Registration successful", body = MessageResponse, content_type = "application/json"),
        (status = 500, description = "Registration failed; the cause is not disclosed", body = ErrorResponse),
    ),
    tag= "accounts"
)]
// axum handler for register
#[instrument(skip(service, payload))]
pub async fn register(
    service: Extension<Arc<AuthService>>,
    payload: Result<Payload<Credentials>, PayloadRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let credentials = match payload {
        Ok(Payload(credentials)) => credentials,
        Err(rejection) => {
            warn!("Invalid registration payload: {}", rejection);
            return Err(ApiError::RegistrationFailed);
        }
    };

    match service.register(credentials).await {
        Ok(_account) => Ok(Json(MessageResponse::new(REGISTERED))),
        Err(err) => {
            match &err {
                AuthError::Validation(_) | AuthError::DuplicateIdentity => {
                    warn!("Registration rejected: {}", err);
                }
                _ => error!("Registration failed: {}", err),
            }
            Err(ApiError::registration(&err))
        }
    }
}
