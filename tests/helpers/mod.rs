//! Shared test helpers for integration tests.

// Not every test target uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use meterhub_core::Clock;
use meterhub_core::clock::ManualClock;
use meterhub_core::config::AppConfig;

/// Response captured from a test request.
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body, if any.
    pub json: Value,
}

/// Test application context over fresh in-memory stores.
///
/// The clock is manual so tests can give sessions exact durations.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Controllable clock shared with the session engine.
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Create a new test application.
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let state =
            meterhub_api::build_state(AppConfig::default(), Arc::clone(&clock) as Arc<dyn Clock>);
        let router = meterhub_api::build_app(state);
        Self { router, clock }
    }

    /// Issue a request against the router.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, json }
    }

    /// Create a resource, returning its id.
    pub async fn create_resource(&self, name: &str, capacity: u32, price: f64) -> i64 {
        let resp = self
            .request(
                "POST",
                "/resources",
                Some(serde_json::json!({
                    "name": name,
                    "capacity": capacity,
                    "price_per_minute": price,
                })),
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED, "body: {}", resp.json);
        resp.json["id"].as_i64().unwrap()
    }

    /// Start a session, returning its id.
    pub async fn start_session(&self, resource_id: i64, user_id: &str) -> i64 {
        let resp = self
            .request(
                "POST",
                "/usage-sessions/start",
                Some(serde_json::json!({
                    "resource_id": resource_id,
                    "user_id": user_id,
                })),
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED, "body: {}", resp.json);
        resp.json["id"].as_i64().unwrap()
    }

    /// Stop a session, returning the completed session body.
    pub async fn stop_session(&self, session_id: i64) -> Value {
        let resp = self
            .request(
                "POST",
                "/usage-sessions/stop",
                Some(serde_json::json!({ "session_id": session_id })),
            )
            .await;
        assert_eq!(resp.status, StatusCode::OK, "body: {}", resp.json);
        resp.json
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
