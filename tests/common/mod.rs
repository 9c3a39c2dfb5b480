#![allow(dead_code)]

use axum::Router;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use link_tracker::infrastructure::persistence::{PgLinkRepository, PgVisitRepository};
use link_tracker::routes::api_router;
use link_tracker::state::AppState;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const PEER_IP: &str = "127.0.0.1";

/// Inserts a fixed peer address, as `into_make_service_with_connect_info` would.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = format!("{}:12345", PEER_IP).parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    AppState::new(
        Arc::new(PgLinkRepository::new(pool.clone())),
        Arc::new(PgVisitRepository::new(pool)),
    )
}

/// Full router with a fixed peer address of [`PEER_IP`].
pub fn make_server(state: AppState) -> TestServer {
    let app: Router = api_router(state).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

/// Full router without peer address info, so only `X-Forwarded-For` is available.
pub fn make_server_without_peer(state: AppState) -> TestServer {
    TestServer::new(api_router(state)).unwrap()
}

pub async fn create_test_link(state: &AppState, url: &str, alias: Option<&str>) -> String {
    state
        .link_service
        .shorten(url.to_string(), alias.map(str::to_string), None)
        .await
        .unwrap()
        .short_code
}

pub async fn create_expiring_link(
    state: &AppState,
    url: &str,
    alias: &str,
    expires_at: DateTime<Utc>,
) -> String {
    state
        .link_service
        .shorten(
            url.to_string(),
            Some(alias.to_string()),
            Some(expires_at.to_rfc3339()),
        )
        .await
        .unwrap()
        .short_code
}
