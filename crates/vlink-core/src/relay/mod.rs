//! Development relay: forwards resolution requests to the upstream API and
//! adds permissive CORS headers, so a page served from an origin the API does
//! not allow can still call it.
//!
//! `OPTIONS` preflight gets an empty 204; `POST` is forwarded verbatim and the
//! upstream status, content type and body are mirrored back. Anything else on
//! the relay path is a 405, any other path a 404. For local use only: no
//! authentication, no rate limiting.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::resolution::classify_curl_error;
use crate::resolution::transport::{self, HttpReply, Timeouts};

/// Headers attached to every response on the relay path.
pub const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Accept"),
];

/// Body sent when the upstream cannot be reached.
const UPSTREAM_FAILURE_BODY: &str = r#"{"status":"error","text":"Proxy error"}"#;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Listen address, e.g. "127.0.0.1:3000" (port 0 picks a free port).
    pub bind: String,
    /// Path served, e.g. "/proxy".
    pub path: String,
    /// Resolution API the relay forwards to.
    pub upstream: String,
    pub connect_timeout: Duration,
    pub timeout: Option<Duration>,
}

impl RelayConfig {
    fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: self.connect_timeout,
            total: self.timeout,
        }
    }
}

/// A relay running as a background task.
#[derive(Debug, Clone)]
pub struct RelayHandle {
    pub addr: SocketAddr,
    path: String,
}

impl RelayHandle {
    /// Address to configure as `relay_url`, e.g. "http://127.0.0.1:3000/proxy".
    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, self.path)
    }
}

/// Routes for one relay: the relay path plus a 404 fallback.
pub fn router(cfg: RelayConfig) -> Router {
    let mut routes = Router::new().route(&cfg.path, post(forward).options(preflight));
    for (name, value) in CORS_HEADERS {
        routes = routes.route_layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ));
    }
    routes
        .with_state(Arc::new(cfg))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

async fn listen(cfg: RelayConfig) -> Result<(TcpListener, Router, RelayHandle)> {
    if !cfg.path.starts_with('/') {
        bail!("relay path must start with '/': {}", cfg.path);
    }
    let listener = TcpListener::bind(&cfg.bind)
        .await
        .with_context(|| format!("relay bind {}", cfg.bind))?;
    let addr = listener.local_addr().context("relay local address")?;
    let handle = RelayHandle {
        addr,
        path: cfg.path.clone(),
    };
    tracing::info!("relay listening on {} -> {}", handle.url(), cfg.upstream);
    Ok((listener, router(cfg), handle))
}

/// Binds the relay and serves it on a spawned task for the life of the runtime.
pub async fn bind(cfg: RelayConfig) -> Result<RelayHandle> {
    let (listener, app, handle) = listen(cfg).await?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::warn!("relay stopped: {}", e);
        }
    });
    Ok(handle)
}

/// Binds the relay and serves it until the server fails.
pub async fn serve(cfg: RelayConfig) -> Result<()> {
    let (listener, app, _) = listen(cfg).await?;
    axum::serve(listener, app).await.context("relay server")
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Forwards `body` upstream and mirrors the reply.
async fn forward(State(cfg): State<Arc<RelayConfig>>, body: Bytes) -> Response {
    tracing::debug!(
        upstream = %cfg.upstream,
        body = %transport::body_preview(&body),
        "relay received request"
    );
    let outcome = tokio::task::spawn_blocking({
        let cfg = Arc::clone(&cfg);
        move || transport::post_json(&cfg.upstream, &body, cfg.timeouts())
    })
    .await;

    match outcome {
        Ok(Ok(reply)) => mirror(&cfg.upstream, reply),
        Ok(Err(e)) => {
            tracing::warn!(
                upstream = %cfg.upstream,
                kind = %classify_curl_error(&e),
                "relay upstream failed: {}",
                e
            );
            upstream_failure()
        }
        Err(e) => {
            tracing::warn!(upstream = %cfg.upstream, "relay upstream task failed: {}", e);
            upstream_failure()
        }
    }
}

fn mirror(upstream: &str, reply: HttpReply) -> Response {
    let content_type = reply.content_type.as_deref().unwrap_or("text/plain");
    tracing::info!(
        upstream,
        status = reply.status,
        content_type,
        "relayed request"
    );
    tracing::debug!(body = %transport::body_preview(&reply.body), "upstream response body");

    let Some(status) = u16::try_from(reply.status)
        .ok()
        .and_then(|s| StatusCode::from_u16(s).ok())
    else {
        tracing::warn!(upstream, status = reply.status, "upstream status out of range");
        return upstream_failure();
    };
    let content_type =
        HeaderValue::from_str(content_type).unwrap_or(HeaderValue::from_static("text/plain"));
    (status, [(header::CONTENT_TYPE, content_type)], reply.body).into_response()
}

fn upstream_failure() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        UPSTREAM_FAILURE_BODY,
    )
        .into_response()
}
