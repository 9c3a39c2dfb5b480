mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use link_tracker::routes::app_router;
use serde_json::Value;
use tower::ServiceExt;

// ─── INFO ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_info_success() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com/info", Some("info1")).await;
    let server = common::make_server(state);

    let response = server.get("/info/info1").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["originalUrl"], "https://example.com/info");
    assert_eq!(json["clickCount"], 0);
    assert!(json["createdAt"].is_string());
    assert!(json.get("expiresAt").is_none());
}

#[tokio::test]
async fn test_info_includes_expiration() {
    let state = common::create_test_state();
    common::create_expiring_link(
        &state,
        "https://example.com",
        "dated",
        Utc::now() + Duration::days(1),
    )
    .await;
    let server = common::make_server(state);

    let json = server.get("/info/dated").await.json::<Value>();

    assert!(json["expiresAt"].is_string());
}

#[tokio::test]
async fn test_info_not_found() {
    let server = common::make_server(common::create_test_state());

    server.get("/info/missing").await.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_success() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com", Some("del001")).await;
    let server = common::make_server(state);

    server.get("/del001").await;

    let response = server.delete("/delete/del001").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "URL deleted successfully"
    );

    server.get("/del001").await.assert_status_not_found();
    server.get("/info/del001").await.assert_status_not_found();
    server.get("/analytics/del001").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_frees_alias() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://old.example.com", Some("again")).await;
    let server = common::make_server(state.clone());

    server.delete("/delete/again").await.assert_status_ok();

    let code = common::create_test_link(&state, "https://new.example.com", Some("again")).await;
    assert_eq!(code, "again");

    let info = server.get("/info/again").await.json::<Value>();
    assert_eq!(info["originalUrl"], "https://new.example.com");
    assert_eq!(info["clickCount"], 0);
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let server = common::make_server(common::create_test_state());

    server.delete("/delete/nonexistent").await.assert_status_not_found();
}

// ─── LIST ────────────────────────────────────────────────────────────────────

async fn seed_links(state: &link_tracker::AppState, count: usize) {
    for i in 1..=count {
        common::create_test_link(
            state,
            &format!("https://example.com/{}", i),
            Some(&format!("link{:02}", i)),
        )
        .await;
    }
}

#[tokio::test]
async fn test_list_pages() {
    let state = common::create_test_state();
    seed_links(&state, 15).await;
    let server = common::make_server(state);

    let first = server.get("/").await;
    first.assert_status_ok();
    let first = first.json::<Value>();

    assert_eq!(first["total"], 15);
    assert_eq!(first["page"], 1);
    assert_eq!(first["limit"], 10);
    let items = first["items"].as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["shortUrl"], "link15");
    assert_eq!(items[9]["shortUrl"], "link06");

    let second = server
        .get("/")
        .add_query_param("page", 2)
        .add_query_param("limit", 10)
        .await
        .json::<Value>();

    assert_eq!(second["total"], 15);
    let items = second["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[4]["shortUrl"], "link01");
}

#[tokio::test]
async fn test_list_item_shape() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com/shape", Some("shape")).await;
    let server = common::make_server(state);

    let json = server.get("/").await.json::<Value>();
    let item = &json["items"][0];

    assert!(item["id"].is_i64());
    assert_eq!(item["shortUrl"], "shape");
    assert_eq!(item["originalUrl"], "https://example.com/shape");
    assert_eq!(item["clickCount"], 0);
    assert!(item["createdAt"].is_string());
    assert!(item["expiresAt"].is_null());
}

#[tokio::test]
async fn test_list_coerces_out_of_range_values() {
    let state = common::create_test_state();
    seed_links(&state, 3).await;
    let server = common::make_server(state);

    let json = server
        .get("/")
        .add_query_param("page", 0)
        .add_query_param("limit", 1000)
        .await
        .json::<Value>();

    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 100);
    assert_eq!(json["items"].as_array().unwrap().len(), 3);

    let json = server
        .get("/")
        .add_query_param("limit", 0)
        .await
        .json::<Value>();

    assert_eq!(json["limit"], 1);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_page_past_end_is_empty() {
    let state = common::create_test_state();
    seed_links(&state, 3).await;
    let server = common::make_server(state);

    let json = server
        .get("/")
        .add_query_param("page", 5)
        .await
        .json::<Value>();

    assert_eq!(json["total"], 3);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_rejects_non_numeric_page() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/").add_query_param("page", "abc").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_list_empty() {
    let server = common::make_server(common::create_test_state());

    let json = server.get("/").await.json::<Value>();

    assert_eq!(json["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

// ─── PATH NORMALIZATION ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com", Some("slash")).await;
    let app = app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/info/slash/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
