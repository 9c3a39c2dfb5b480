mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::Value;

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com/target", Some("redirect1")).await;
    let server = common::make_server(state);

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "notfound");
}

#[tokio::test]
async fn test_redirect_records_click_and_visit() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com", Some("clickme")).await;
    let server = common::make_server(state.clone());

    server.get("/clickme").await;
    server.get("/clickme").await;

    let info = server.get("/info/clickme").await.json::<Value>();
    assert_eq!(info["clickCount"], 2);

    let analytics = server.get("/analytics/clickme").await.json::<Value>();
    let visitors = analytics["recentVisitors"].as_array().unwrap();
    assert_eq!(visitors.len(), 2);
    assert_eq!(visitors[0]["ipAddress"], common::PEER_IP);

    assert_eq!(state.link_service.visit_log_len("clickme").await.unwrap(), 2);
}

#[tokio::test]
async fn test_redirect_expired_link_has_no_side_effects() {
    let state = common::create_test_state();
    common::create_expiring_link(
        &state,
        "https://example.com",
        "expired",
        Utc::now() - Duration::hours(1),
    )
    .await;
    let server = common::make_server(state.clone());

    server.get("/expired").await.assert_status_not_found();

    // Expired links stay inspectable.
    let info = server.get("/info/expired").await;
    info.assert_status_ok();
    assert_eq!(info.json::<Value>()["clickCount"], 0);

    let analytics = server.get("/analytics/expired").await.json::<Value>();
    assert!(analytics["recentVisitors"].as_array().unwrap().is_empty());
    assert_eq!(state.link_service.visit_log_len("expired").await.unwrap(), 0);
}

#[tokio::test]
async fn test_redirect_before_expiry() {
    let state = common::create_test_state();
    common::create_expiring_link(
        &state,
        "https://example.com/soon",
        "soon",
        Utc::now() + Duration::hours(1),
    )
    .await;
    let server = common::make_server(state);

    let response = server.get("/soon").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_redirect_uses_forwarded_for_without_peer() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com", Some("proxied")).await;
    let server = common::make_server_without_peer(state);

    let response = server
        .get("/proxied")
        .add_header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
        .await;
    assert_eq!(response.status_code(), StatusCode::FOUND);

    let analytics = server.get("/analytics/proxied").await.json::<Value>();
    assert_eq!(analytics["recentVisitors"][0]["ipAddress"], "203.0.113.7");
}

#[tokio::test]
async fn test_redirect_peer_address_wins_over_forwarded_for() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com", Some("direct")).await;
    let server = common::make_server(state);

    server
        .get("/direct")
        .add_header("X-Forwarded-For", "203.0.113.7")
        .await;

    let analytics = server.get("/analytics/direct").await.json::<Value>();
    assert_eq!(analytics["recentVisitors"][0]["ipAddress"], common::PEER_IP);
}

#[tokio::test]
async fn test_redirect_unknown_client() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com", Some("anon")).await;
    let server = common::make_server_without_peer(state);

    server.get("/anon").await;

    let analytics = server.get("/analytics/anon").await.json::<Value>();
    assert_eq!(analytics["recentVisitors"][0]["ipAddress"], "unknown");
}

#[tokio::test]
async fn test_codes_are_case_sensitive() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://upper.example.com", Some("Promo")).await;
    let server = common::make_server(state);

    server.get("/promo").await.assert_status_not_found();
    assert_eq!(
        server.get("/Promo").await.header("location"),
        "https://upper.example.com"
    );
}

#[tokio::test]
async fn test_redirect_to_unsendable_url_is_server_error() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com/a\nb", Some("broken")).await;
    let server = common::make_server(state);

    let response = server.get("/broken").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get("location").is_none());
    assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");
}
