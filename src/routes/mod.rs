//! HTTP route handlers.
//!
//! Both endpoints are computed per request, so every response is marked
//! `Cache-Control: no-store` for upstream caches.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod recommend;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Health check - always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    let recommend_routes =
        Router::new().route("/recommend", post(recommend::recommend_items));

    Router::new()
        .merge(health_routes)
        .merge(recommend_routes)
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
