//! HTTP routing configuration
//!
//! This module defines all HTTP routes and their corresponding handlers.
//!
//! # Route Structure
//!
//! All routes are prefixed with `/api/v1`:
//!
//! - GET /api/v1/github/:username/repos - List a user's non-fork repositories
//! - GET /api/v1/health - Health check

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, AppState};

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

/// Create the complete API router with all routes configured.
///
/// This function sets up:
/// - All endpoint routes
/// - CORS configuration
/// - Request tracing
/// - Timeout handling
pub fn create_router(state: AppState) -> Router {
    // Configure CORS for web UI support
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        // Cache preflight responses for 1 hour
        .max_age(Duration::from_secs(3600));

    // Configure request tracing
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(true))
        .on_response(DefaultOnResponse::new().include_headers(true));

    // Configure request timeout (30 seconds)
    let timeout_layer = TimeoutLayer::new(Duration::from_secs(30));

    // API v1 routes
    let api_v1 = Router::new()
        .route(
            "/github/:username/repos",
            get(handlers::list_user_repositories),
        )
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(timeout_layer)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    // Root router with API version prefix
    Router::new().nest("/api/v1", api_v1)
}
