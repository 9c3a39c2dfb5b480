//! API route configuration.

use crate::api::handlers::{
    analytics_handler, delete_link_handler, health_handler, link_info_handler,
    list_links_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All link routes. None of them require authentication.
///
/// # Endpoints
///
/// - `GET    /`                  - Paged link listing, newest first
/// - `POST   /shorten`           - Create a short link
/// - `GET    /health`            - Storage health check
/// - `GET    /info/{code}`       - Link metadata
/// - `DELETE /delete/{code}`     - Delete a link and its visits
/// - `GET    /analytics/{code}`  - Click count and recent visitors
/// - `GET    /{code}`            - Redirect, recording the visit
///
/// Static segments win over `/{code}`, which is why `shorten` and `health`
/// cannot be used as aliases.
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_links_handler))
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/info/{code}", get(link_info_handler))
        .route("/delete/{code}", delete(delete_link_handler))
        .route("/analytics/{code}", get(analytics_handler))
        .route("/{code}", get(redirect_handler))
}
