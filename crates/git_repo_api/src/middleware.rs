//! Request tracing middleware
//!
//! The service exposes only public read endpoints, so there is no inbound
//! authentication; the middleware layer is limited to request logging.

use axum::{extract::Request, middleware::Next, response::Response};

#[cfg(test)]
#[path = "middleware_tests.rs"]
mod tests;

/// Request tracing middleware.
///
/// Tags each request with a generated ID and logs start and completion for
/// observability.
pub async fn tracing_middleware(request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "Request started"
    );

    let response = next.run(request).await;

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        "Request completed"
    );

    response
}
