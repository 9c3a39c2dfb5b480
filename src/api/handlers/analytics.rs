//! Handler for link analytics endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count and the five most recent visitors of a link.
///
/// # Endpoint
///
/// `GET /analytics/{code}`
///
/// # Response
///
/// ```json
/// {
///   "clickCount": 42,
///   "recentVisitors": [
///     { "ipAddress": "203.0.113.7", "visitedAt": "2025-01-01T12:00:00Z" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn analytics_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.link_service.analytics(&code).await?;
    Ok(Json(analytics.into()))
}
