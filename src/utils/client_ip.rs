//! Client address extraction for visit analytics.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{Extensions, HeaderMap};
use std::convert::Infallible;
use std::net::SocketAddr;

/// Value recorded when no client address is available.
pub const UNKNOWN_CLIENT_IP: &str = "unknown";

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Determines the address to record for a visit.
///
/// Resolution order:
///
/// 1. The peer socket address (requires `into_make_service_with_connect_info`)
/// 2. The first entry of the `X-Forwarded-For` header
/// 3. The literal `"unknown"`
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
///
/// assert_eq!(client_ip(&Extensions::new(), &headers), "203.0.113.7");
/// ```
pub fn client_ip(extensions: &Extensions, headers: &HeaderMap) -> String {
    if let Some(ConnectInfo(addr)) = extensions.get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    forwarded_for(headers).unwrap_or_else(|| UNKNOWN_CLIENT_IP.to_string())
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get(X_FORWARDED_FOR)?
        .to_str()
        .ok()?
        .split(',')
        .map(str::trim)
        .find(|entry| !entry.is_empty())
        .map(str::to_string)
}

/// Extractor yielding the client address as resolved by [`client_ip`].
///
/// Never rejects a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(client_ip(&parts.extensions, &parts.headers)))
    }
}
