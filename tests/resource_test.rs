//! Integration tests for resource CRUD endpoints.

mod helpers;

use axum::body::Body;
use http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use helpers::TestApp;

#[tokio::test]
async fn test_create_and_get_resource() {
    let app = TestApp::new();

    let resp = app
        .request(
            "POST",
            "/resources",
            Some(json!({
                "name": "gpu-a100",
                "description": "A100 pool",
                "capacity": 4,
                "price_per_minute": 2.50,
            })),
        )
        .await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.json["name"], "gpu-a100");
    assert_eq!(resp.json["capacity"], 4);
    assert_eq!(resp.json["price_per_minute"], 2.5);
    assert!(resp.json["updated_at"].is_null());

    let id = resp.json["id"].as_i64().unwrap();
    let fetched = app.request("GET", &format!("/resources/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json["description"], "A100 pool");
}

#[tokio::test]
async fn test_list_resources() {
    let app = TestApp::new();
    app.create_resource("first", 1, 1.0).await;
    app.create_resource("second", 2, 2.0).await;

    let resp = app.request("GET", "/resources", None).await;
    assert_eq!(resp.status, StatusCode::OK);

    let list = resp.json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "first");
    assert_eq!(list[1]["name"], "second");
}

#[tokio::test]
async fn test_duplicate_name_rejected() {
    let app = TestApp::new();
    app.create_resource("printer", 1, 0.10).await;

    let resp = app
        .request(
            "POST",
            "/resources",
            Some(json!({
                "name": "printer",
                "capacity": 2,
                "price_per_minute": 0.20,
            })),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json["error"], "VALIDATION");
}

#[tokio::test]
async fn test_zero_capacity_rejected() {
    let app = TestApp::new();

    let resp = app
        .request(
            "POST",
            "/resources",
            Some(json!({
                "name": "bad",
                "capacity": 0,
                "price_per_minute": 1.0,
            })),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_resource() {
    let app = TestApp::new();
    let id = app.create_resource("gpu", 2, 2.50).await;

    let resp = app
        .request(
            "PUT",
            &format!("/resources/{id}"),
            Some(json!({ "capacity": 8 })),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["capacity"], 8);
    assert_eq!(resp.json["name"], "gpu");
    assert!(!resp.json["updated_at"].is_null());
}

#[tokio::test]
async fn test_get_missing_resource() {
    let app = TestApp::new();
    let resp = app.request("GET", "/resources/999", None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_resource() {
    let app = TestApp::new();
    let id = app.create_resource("ephemeral", 1, 1.0).await;

    let resp = app.request("DELETE", &format!("/resources/{id}"), None).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let again = app.request("DELETE", &format!("/resources/{id}"), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let app = TestApp::new();

    let request = http::Request::builder()
        .method("OPTIONS")
        .uri("/resources")
        .header("origin", "https://ui.example")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    // The default configuration allows any origin.
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("preflight response must carry an allow-origin header");
    assert_eq!(allow_origin, "*");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new();
    let resp = app.request("GET", "/health", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["status"], "healthy");
}
