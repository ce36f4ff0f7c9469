use axum::Json;
use tracing::{debug, instrument};

use super::types::{ErrorResponse, ProtectedResponse};
use crate::api::extract::Authenticated;

pub const ACCESSED: &str = "Protected route accessed successfully";

#[utoipa::path(
    get,
    path= "/protected",
    params(
        ("Authorization" = String, Header, description = "Access token, bare or as `Bearer <token>`")
    ),
    responses (
        (status = 200, description = "Token accepted", body = ProtectedResponse, content_type = "application/json"),
        (status = 401, description = "Missing, malformed, forged or expired token", body = ErrorResponse),
    ),
    tag= "accounts"
)]
// axum handler for protected
#[instrument(skip(claims), fields(identity_key = %claims.0.sub))]
pub async fn protected(claims: Authenticated) -> Json<ProtectedResponse> {
    let Authenticated(claims) = claims;

    debug!("Access granted");

    Json(ProtectedResponse {
        message: ACCESSED.to_string(),
        identity_key: claims.sub,
    })
}
