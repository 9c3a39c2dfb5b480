//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com/some/long/path",
///   "expiresAt": "2030-01-01T00:00:00Z",  // optional
///   "alias": "my-link"                     // optional
/// }
/// ```
///
/// # Response
///
/// **201 Created** with the code in `shortUrl`:
///
/// ```json
/// { "shortUrl": "aB3dE9_x" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed bodies, validation failures, a taken
/// or reserved alias, and unparseable expiration dates.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .shorten(payload.original_url, payload.alias, payload.expires_at)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: link.short_code,
        }),
    ))
}
