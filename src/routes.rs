//! Top-level router configuration.
//!
//! # Route Structure
//!
//! See [`crate::api::routes::link_routes`]. Every route is public.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Link routes with state and tracing applied, without path normalization.
pub fn api_router(state: AppState) -> Router {
    api::routes::link_routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Trailing slashes are trimmed before routing, so `/info/abc/` reaches the
/// same handler as `/info/abc`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
