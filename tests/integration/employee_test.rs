//! Integration tests for employee endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

fn developer(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "designation": "Developer",
        "technology": "Rust",
        "commission": 500,
        "salary": 15000.5,
        "phone": 9353938926_i64
    })
}

#[tokio::test]
async fn test_create_and_fetch_employee() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/employees", Some(developer("Aliya"))).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Employee created successfully");
    let id = response.body["employee"]["id"].as_str().expect("id").to_string();

    let response = app.request("GET", &format!("/employees/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Aliya");
    assert_eq!(response.body["salary"], 15000.5);
    assert_eq!(response.body["phone"], 9353938926_i64);
}

#[tokio::test]
async fn test_list_preserves_insertion_order_after_delete() {
    let app = helpers::TestApp::new();
    for name in ["A", "B", "C"] {
        app.request("POST", "/employees", Some(developer(name))).await;
    }

    let response = app.request("DELETE", "/employees/2", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/employees", None).await;
    let names: Vec<&str> = response
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[tokio::test]
async fn test_update_keeps_list_position() {
    let app = helpers::TestApp::new();
    for name in ["A", "B", "C"] {
        app.request("POST", "/employees", Some(developer(name))).await;
    }

    let response = app.request("PUT", "/employees/2", Some(developer("Bee"))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["employee"]["id"], "2");

    let response = app.request("GET", "/employees", None).await;
    assert_eq!(response.body[1]["name"], "Bee");
    assert_eq!(response.body[1]["id"], "2");
}

#[tokio::test]
async fn test_fractional_integer_field_is_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/employees", Some(json!({ "commission": 1.5 })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_collections_are_independent() {
    let app = helpers::TestApp::new();
    app.request("POST", "/employees", Some(developer("A"))).await;

    let response = app.request("GET", "/coffees/1", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("POST", "/flights", Some(json!({ "number": "AI 1" }))).await;
    assert_eq!(response.body["flight"]["id"], "1");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/employees", None).await;

    let request_id = response.request_id.expect("x-request-id header");
    assert_eq!(request_id.len(), 36);
}

#[tokio::test]
async fn test_cross_origin_requests_can_read_request_id() {
    let app = helpers::TestApp::new();

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/employees")
        .header("Origin", "https://ui.example")
        .body(axum::body::Body::empty())
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get("access-control-allow-origin").map(|v| v.as_bytes()),
        Some(&b"*"[..])
    );
    let exposed = response
        .headers
        .get("access-control-expose-headers")
        .and_then(|v| v.to_str().ok())
        .expect("expose header");
    assert!(exposed.contains("x-request-id"));
}

#[tokio::test]
async fn test_preflight_lists_allowed_methods() {
    let app = helpers::TestApp::new();

    let req = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/employees/1")
        .header("Origin", "https://ui.example")
        .header("Access-Control-Request-Method", "PUT")
        .body(axum::body::Body::empty())
        .expect("request");
    let response = app.send(req).await;

    assert!(response.status.is_success());
    let methods = response
        .headers
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .expect("allow methods");
    assert!(methods.contains("PUT"));
    assert!(methods.contains("DELETE"));
}
