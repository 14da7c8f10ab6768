//! Integration tests for flight endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use recordhub_api::app::build_state;
use recordhub_api::router::build_resource_router;
use recordhub_core::config::AppConfig;
use recordhub_entity::ResourceKind;

#[tokio::test]
async fn test_seeded_flights_are_listed() {
    let app = helpers::TestApp::seeded();

    let response = app.request("GET", "/flights", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let flights = response.body.as_array().expect("array");
    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0]["id"], "1001");
    assert_eq!(flights[0]["airline_name"], "Air India");
    assert_eq!(flights[1]["id"], "1002");
}

#[tokio::test]
async fn test_ids_continue_after_seed() {
    let app = helpers::TestApp::seeded();

    let response = app
        .request(
            "POST",
            "/flights",
            Some(json!({
                "number": "EK 501",
                "airline_name": "Emirates",
                "source": "Dubai",
                "destination": "Mumbai",
                "capacity": 350,
                "price": 22000.0
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Flight created successfully");
    assert_eq!(response.body["flight"]["id"], "1003");
}

#[tokio::test]
async fn test_delete_seeded_flight() {
    let app = helpers::TestApp::seeded();

    let response = app.request("DELETE", "/flights/1001", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], "1001");

    let response = app.request("DELETE", "/flights/1001", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Flight not found");
}

#[tokio::test]
async fn test_resource_router_serves_only_its_collection() {
    let state = build_state(AppConfig::default()).expect("state");
    let app = helpers::TestApp {
        router: build_resource_router(state, ResourceKind::Flight),
    };

    let response = app.request("GET", "/flights", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/coffees", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_disabled_collection_is_not_routed() {
    let mut config = AppConfig::default();
    config.resources.flight.enabled = false;
    let app = helpers::TestApp::with_config(config);

    let response = app.request("GET", "/flights", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/employees", None).await;
    assert_eq!(response.status, StatusCode::OK);
}
