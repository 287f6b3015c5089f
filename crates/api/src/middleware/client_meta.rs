//! Client metadata extraction for throttling and submission records.
//!
//! Usage: Add `ClientMeta` as an extractor parameter to get the client's
//! address and user agent.
//!
//! ```ignore
//! async fn my_handler(meta: ClientMeta, ...) -> ... {
//!     // meta.ip and meta.user_agent are available here
//! }
//! ```

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};

/// Client address and user agent for the current request.
///
/// The address prefers the first `X-Forwarded-For` hop (the service runs
/// behind a reverse proxy in production) and falls back to the socket peer.
/// Spoofable when the proxy is absent, which is fine for a soft throttle.
#[derive(Debug, Clone)]
pub struct ClientMeta {
    pub ip: String,
    pub user_agent: Option<String>,
}

impl<S> FromRequestParts<S> for ClientMeta
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let ip = forwarded.unwrap_or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
                .unwrap_or_else(|| "unknown".to_string())
        });

        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        Ok(ClientMeta { ip, user_agent })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> ClientMeta {
        let (mut parts, _) = request.into_parts();
        ClientMeta::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn prefers_first_forwarded_hop() {
        let request = Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(())
            .unwrap();

        let meta = extract(request).await;
        assert_eq!(meta.ip, "203.0.113.7");
    }

    #[tokio::test]
    async fn falls_back_to_socket_peer() {
        let mut request = Request::builder().body(()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([198, 51, 100, 1], 4321))));

        let meta = extract(request).await;
        assert_eq!(meta.ip, "198.51.100.1");
    }

    #[tokio::test]
    async fn unknown_without_any_source() {
        let request = Request::builder().body(()).unwrap();

        let meta = extract(request).await;
        assert_eq!(meta.ip, "unknown");
    }

    #[tokio::test]
    async fn captures_user_agent() {
        let request = Request::builder()
            .header("user-agent", "Mozilla/5.0")
            .body(())
            .unwrap();

        let meta = extract(request).await;
        assert_eq!(meta.user_agent.as_deref(), Some("Mozilla/5.0"));
    }
}
