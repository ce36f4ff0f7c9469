//! Request extractors shared by the handlers.

use axum::{
    Form, Json,
    extract::{
        FromRequest, FromRequestParts, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::{HeaderMap, header::CONTENT_TYPE, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

use super::error::ApiError;
use crate::auth::{AuthService, Claims};

/// Request body accepted as JSON or as `application/x-www-form-urlencoded`.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[derive(Debug, Error)]
pub enum PayloadRejection {
    #[error("invalid JSON body: {0}")]
    Json(#[from] JsonRejection),
    #[error("invalid form body: {0}")]
    Form(#[from] FormRejection),
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Json(rejection) => rejection.into_response(),
            Self::Form(rejection) => rejection.into_response(),
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Self(value))
        }
    }
}

/// Claims of a request that passed the access-control gate.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Claims);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(service) = parts.extensions.get::<Arc<AuthService>>() else {
            error!("AuthService extension missing from router");
            return Err(ApiError::InvalidToken);
        };

        service.authorize(&parts.headers).map(Self).map_err(|err| {
            debug!("Rejected token: {err}");
            ApiError::InvalidToken
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn form_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_form(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(!is_form(&headers));

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=utf-8"),
        );
        assert!(is_form(&headers));
    }
}
