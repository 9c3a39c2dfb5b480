//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::ClientIp;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the client address (peer socket, `X-Forwarded-For`, `"unknown"`)
/// 2. Look up the link and check its expiry
/// 3. Increment the click count and record the visit
/// 4. Return 302 Found with `Location` set to the original URL
///
/// Both writes complete before the response is sent, so a follow-up analytics
/// request observes the visit.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or the link has expired, and
/// 500 Internal Server Error if the stored URL cannot be sent as a header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.link_service.resolve(&code, &ip).await?;

    let location = HeaderValue::try_from(original_url).map_err(|e| {
        tracing::error!(code = %code, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Stored URL cannot be used for a redirect", json!({ "code": code }))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
