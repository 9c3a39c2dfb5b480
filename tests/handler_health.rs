mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use link_tracker::domain::entities::{Link, ListOrder, NewLink};
use link_tracker::domain::error::StoreError;
use link_tracker::domain::repositories::LinkRepository;
use link_tracker::infrastructure::memory::MemoryStore;
use link_tracker::state::AppState;
use serde_json::Value;
use std::sync::Arc;

/// Link store whose backend is unreachable.
struct UnavailableLinkRepository;

fn unavailable<T>() -> Result<T, StoreError> {
    Err(StoreError::Backend("connection refused".to_string()))
}

#[async_trait]
impl LinkRepository for UnavailableLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, StoreError> {
        unavailable()
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, StoreError> {
        unavailable()
    }

    async fn increment_click_count(&self, _id: i64) -> Result<(), StoreError> {
        unavailable()
    }

    async fn delete(&self, _id: i64) -> Result<(), StoreError> {
        unavailable()
    }

    async fn count(&self) -> Result<i64, StoreError> {
        unavailable()
    }

    async fn list_page(
        &self,
        _offset: i64,
        _limit: i64,
        _order: ListOrder,
    ) -> Result<Vec<Link>, StoreError> {
        unavailable()
    }
}

fn unavailable_state() -> AppState {
    AppState::new(
        Arc::new(UnavailableLinkRepository),
        Arc::new(MemoryStore::new().visit_repository()),
    )
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com", None).await;
    let server = common::make_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(
        json["checks"]["storage"]["message"],
        "Connected, 1 links stored"
    );
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = common::make_server(unavailable_state());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}

#[tokio::test]
async fn test_storage_failure_maps_to_500_without_details() {
    let server = common::make_server(unavailable_state());

    let response = server.get("/info/anything").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Storage error");
}

#[tokio::test]
async fn test_get_shorten_is_not_a_redirect() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/shorten").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}
