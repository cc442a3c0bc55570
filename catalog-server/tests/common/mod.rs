//! Shared test fixtures: a server state over a scratch database and a
//! tiny request helper driving the real router.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use catalog_server::auth::JwtConfig;
use catalog_server::{Config, ServerState, routes};

pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Build a server state over a fresh scratch directory
pub async fn test_state() -> (ServerState, TempDir) {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let mut config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    config.jwt = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiration_minutes: 60,
        issuer: "catalog-server".to_string(),
        audience: "catalog-clients".to_string(),
    };
    let state = ServerState::initialize(&config).await.expect("init state");
    (state, tmp)
}

/// Build the full application router over a fresh scratch database
pub async fn test_app() -> (Router, ServerState, TempDir) {
    let (state, tmp) = test_state().await;
    let app = routes::build_app().with_state(state.clone());
    (app, state, tmp)
}

/// Issue a request and decode the JSON body
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    request_with_auth(app, method, uri, body, None).await
}

/// Issue a request with an optional bearer token
pub async fn request_with_auth(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
    bearer: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(req).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse JSON body")
    };
    (status, value)
}
