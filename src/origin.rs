//! Origin Gate — origin-based access control.
//!
//! Two layers work off the same allow-list:
//!
//! - [`OriginGate`] runs as axum middleware before routing and answers 403
//!   to any request declaring an origin outside the list. Requests with no
//!   `Origin` header (same-origin, curl, server-to-server) pass.
//! - [`cors_layer`] is standard `tower-http` CORS middleware, so preflight
//!   `OPTIONS` requests and response headers follow the usual semantics.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{HeaderValue, CONTENT_TYPE, ORIGIN};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Cross-origin allow-list, checked against the request's `Origin` header.
///
/// The list is plain data so tests can inject their own.
#[derive(Clone)]
pub struct OriginGate {
    allowed: Arc<Vec<String>>,
}

impl OriginGate {
    pub fn new(allowed: Vec<String>) -> Self {
        Self {
            allowed: Arc::new(allowed),
        }
    }

    /// Absent origin → allowed. Listed origin → allowed. Otherwise denied.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allowed.iter().any(|a| a == origin),
        }
    }

    /// The origins this gate accepts.
    pub fn origins(&self) -> &[String] {
        &self.allowed
    }
}

/// Middleware that rejects disallowed origins before any route handler runs.
pub async fn enforce(
    State(gate): State<OriginGate>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok());

    if gate.is_allowed(origin) {
        return next.run(request).await;
    }

    tracing::warn!(origin = origin.unwrap_or(""), "rejected cross-origin request");
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "message": "Not allowed by CORS" })),
    )
        .into_response()
}

/// CORS layer for the same allow-list: handles preflight and response headers.
pub fn cors_layer(gate: &OriginGate) -> CorsLayer {
    let origins: Vec<HeaderValue> = gate
        .origins()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
}
