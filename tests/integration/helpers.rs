//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use recordhub_api::app::build_state;
use recordhub_api::router::build_router;
use recordhub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The unified Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test application with empty collections
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with every collection seeded
    pub fn seeded() -> Self {
        Self::with_config(AppConfig::default().with_seed_fixtures())
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let state = build_state(config).expect("Failed to build state");
        Self {
            router: build_router(state),
        }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, body_str).await
    }

    /// Make a request with a verbatim body, e.g. malformed JSON
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: impl Into<String>,
    ) -> TestResponse {
        self.request_with_content_type(method, path, Some("application/json"), body)
            .await
    }

    /// Make a request with an arbitrary `Content-Type`, or none at all
    pub async fn request_with_content_type(
        &self,
        method: &str,
        path: &str,
        content_type: Option<&str>,
        body: impl Into<String>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            req = req.header("Content-Type", content_type);
        }

        let req = req
            .body(Body::from(body.into()))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a fully built request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let request_id = headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            headers,
            request_id,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Response headers
    pub headers: HeaderMap,
    /// Value of the `x-request-id` response header
    pub request_id: Option<String>,
}
