//! HTTP route handlers for the web service.
//!
//! Routes are organized by content type, with per-route Cache-Control headers.
//! The static greeting page is cacheable by upstream proxies; the health
//! endpoint is left uncached so liveness probes always reach the process.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PAGE;
use crate::middleware::request_span_layer;

/// Creates the Axum router with all routes and cache headers.
///
/// Unmatched paths fall through to the framework's default 404 response.
pub fn create_router() -> Router {
    // Greeting page - static content, cacheable
    let page_routes = Router::new()
        .route("/", get(home::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PAGE),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(page_routes)
        .merge(health_routes)
        // Request span middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_span_layer))
}
