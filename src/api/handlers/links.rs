//! Handlers for link metadata, deletion and listing.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::api::dto::link::{LinkInfoResponse, MessageResponse};
use crate::api::dto::pagination::{LinkListResponse, ListQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Returns link metadata.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// Expired links are still reported; `expiresAt` is omitted when unset.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn link_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let link = state.link_service.info(&code).await?;
    Ok(Json(link.into()))
}

/// Deletes a link and its visit history.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(MessageResponse {
        message: "URL deleted successfully".to_string(),
    }))
}

/// Lists links, newest first.
///
/// # Endpoint
///
/// `GET /?page=1&limit=10`
///
/// `page` below 1 is raised to 1 and `limit` is clamped into `1..=100`.
///
/// # Response
///
/// ```json
/// {
///   "items": [
///     {
///       "id": 15,
///       "shortUrl": "promo",
///       "originalUrl": "https://example.com",
///       "createdAt": "2025-01-01T12:00:00Z",
///       "clickCount": 3,
///       "expiresAt": null
///     }
///   ],
///   "total": 15,
///   "page": 1,
///   "limit": 10
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `page` or `limit` is not an integer.
pub async fn list_links_handler(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<LinkListResponse>, AppError> {
    let Query(query) = query?;
    let (page, limit) = query.page_and_limit();

    let page = state.link_service.list_all(page, limit).await?;

    Ok(Json(page.into()))
}
