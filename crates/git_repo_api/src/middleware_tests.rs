//! Tests for middleware module

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn test_tracing_middleware_passes_request_through() {
    let app = Router::new()
        .route("/ping", get(|| async { "pong" }))
        .layer(middleware::from_fn(tracing_middleware));

    let request = Request::builder()
        .method("GET")
        .uri("/ping")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"pong");
}

#[tokio::test]
async fn test_tracing_middleware_preserves_error_status() {
    let app = Router::new()
        .route(
            "/fail",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .layer(middleware::from_fn(tracing_middleware));

    let request = Request::builder()
        .method("GET")
        .uri("/fail")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
