//! Tests for handlers module
//!
//! These tests run the full router against a wiremock GitHub upstream,
//! mirroring the service's production wiring.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::routes::create_router;
use github_client::{create_rest_client, GitHubClient};

/// Build an app whose GitHub client points at the given mock server.
fn test_app(mock_server: &MockServer) -> axum::Router {
    let octocrab = create_rest_client(&mock_server.uri(), None).expect("client should build");
    let state = AppState::new(Arc::new(GitHubClient::new(octocrab)));
    create_router(state)
}

// ============================================================================
// Repository Listing Tests
// ============================================================================

/// Verifies the aggregated response: forks excluded, branches attached, and
/// no fork flag in the serialized output.
#[tokio::test]
async fn test_list_user_repositories_returns_mapped_repositories() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/testuser/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "cool-project",
                "owner": { "login": "testuser" },
                "fork": false
            },
            {
                "name": "calc",
                "owner": { "login": "testuser" },
                "fork": false
            },
            {
                "name": "pacman",
                "owner": { "login": "testuser" },
                "fork": true
            }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/testuser/cool-project/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "main", "commit": { "sha": "abc123sha" } }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/testuser/calc/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "main", "commit": { "sha": "abc321sha" } },
            { "name": "refactor", "commit": { "sha": "abc222sha" } }
        ])))
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/github/testuser/repos")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let response_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        response_json,
        json!([
            {
                "name": "cool-project",
                "owner": { "login": "testuser" },
                "branches": [
                    { "name": "main", "commit": { "sha": "abc123sha" } }
                ]
            },
            {
                "name": "calc",
                "owner": { "login": "testuser" },
                "branches": [
                    { "name": "main", "commit": { "sha": "abc321sha" } },
                    { "name": "refactor", "commit": { "sha": "abc222sha" } }
                ]
            }
        ])
    );
}

/// Verifies that an unknown user results in a 404 with the documented body.
#[tokio::test]
async fn test_list_user_repositories_unknown_user_returns_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/nonexistent/repos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/github/nonexistent/repos")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let response_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        response_json,
        json!({ "status": 404, "message": "User not found" })
    );
}

/// Verifies that an exhausted upstream rate limit surfaces as 403.
#[tokio::test]
async fn test_list_user_repositories_rate_limited_returns_403() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/testuser/repos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded"
        })))
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/github/testuser/repos")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let response_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        response_json,
        json!({ "status": 403, "message": "GitHub API rate limit exceeded" })
    );
}

/// Verifies that a user with no repositories yields an empty array.
#[tokio::test]
async fn test_list_user_repositories_empty_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/testuser/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/github/testuser/repos")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let response_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(response_json, json!([]));
}

// ============================================================================
// Health Check Tests
// ============================================================================

/// Test that health check handler returns proper JSON response
#[tokio::test]
async fn test_health_check_returns_json() {
    let response = health_check().await;

    assert_eq!(response.0.status, "healthy");
    assert!(response.0.version.is_some());
    assert!(!response.0.timestamp.is_empty());
}

/// Test that health check includes version from Cargo.toml
#[tokio::test]
async fn test_health_check_includes_version() {
    let response = health_check().await;

    assert_eq!(
        response.0.version,
        Some(env!("CARGO_PKG_VERSION").to_string())
    );
}

/// Test that health check timestamp is valid ISO 8601
#[tokio::test]
async fn test_health_check_timestamp_format() {
    let response = health_check().await;

    // Should be parseable as ISO 8601
    let parsed = chrono::DateTime::parse_from_rfc3339(&response.0.timestamp);
    assert!(parsed.is_ok(), "Timestamp should be valid ISO 8601 format");
}
