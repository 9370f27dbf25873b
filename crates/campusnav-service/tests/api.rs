use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use campusnav_lib::{Graph, LocationCatalog, Router, RoutingConfig};
use campusnav_service::{app, AppState};

fn campus_server() -> TestServer {
    let state = AppState::load(None, None, RoutingConfig::default()).expect("state loads");
    TestServer::new(app(state)).expect("test server starts")
}

#[tokio::test]
async fn route_between_named_locations() {
    let server = campus_server();
    let response = server
        .post("/api/v1/route")
        .json(&json!({ "from": "Main Entrance", "to": "Library" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["kind"], "network");
    assert_eq!(body["algorithm"], "dijkstra");
    assert_eq!(body["origin"]["label"], "Main Entrance");
    assert_eq!(body["points"][0], json!([13.031966, 80.181146]));
    let points = body["points"].as_array().expect("points array");
    assert_eq!(points.last(), Some(&json!([13.03333, 80.18138])));
    assert_eq!(body["geojson"]["geometry"]["type"], "LineString");
    assert_eq!(body["content_type"], "application/json");
}

#[tokio::test]
async fn route_accepts_coordinates_and_algorithm() {
    let server = campus_server();
    let response = server
        .post("/api/v1/route")
        .json(&json!({
            "from": "13.03197,80.18003",
            "to": "Q Mart",
            "algorithm": "a-star"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["algorithm"], "a-star");
    assert_eq!(body["origin"]["label"], "13.031970,80.180030");
}

#[tokio::test]
async fn unknown_location_is_404_problem() {
    let server = campus_server();
    let response = server
        .post("/api/v1/route")
        .json(&json!({ "from": "Libary", "to": "Q Mart" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.header("content-type"),
        "application/problem+json"
    );
    let body: Value = response.json();
    assert_eq!(body["type"], "/problems/unknown-location");
    assert_eq!(body["suggestions"][0], "Library");
}

#[tokio::test]
async fn blank_endpoint_is_400_problem() {
    let server = campus_server();
    let response = server
        .post("/api/v1/route")
        .json(&json!({ "from": "", "to": "Q Mart" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["type"], "/problems/invalid-request");
}

#[tokio::test]
async fn incomplete_body_is_problem_json() {
    let server = campus_server();
    let response = server
        .post("/api/v1/route")
        .json(&json!({ "from": "Library" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.header("content-type"),
        "application/problem+json"
    );
    let body: Value = response.json();
    assert_eq!(body["type"], "/problems/invalid-request");
    assert_eq!(body["status"], 422);
    assert!(body["detail"].as_str().unwrap_or_default().contains("to"));
}

#[tokio::test]
async fn non_json_body_is_problem_json() {
    let server = campus_server();
    let response = server.post("/api/v1/route").text("from=Library").await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = response.json();
    assert_eq!(body["type"], "/problems/invalid-request");
}

#[tokio::test]
async fn empty_graph_routes_in_a_straight_line() {
    let router = Router::from_graph(Graph::default(), RoutingConfig::default()).unwrap();
    let state = AppState::from_parts(router, LocationCatalog::campus());
    let server = TestServer::new(app(state)).expect("test server starts");

    let response = server
        .post("/api/v1/route")
        .json(&json!({ "from": "Main Entrance", "to": "Library" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["kind"], "direct");
    assert_eq!(body["point_count"], 2);

    server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn locations_can_be_filtered_by_category() {
    let server = campus_server();

    let all: Value = server.get("/api/v1/locations").await.json();
    assert_eq!(all["count"], 23);

    let response = server
        .get("/api/v1/locations")
        .add_query_param("category", "food")
        .await;
    response.assert_status_ok();
    let food: Value = response.json();
    assert_eq!(food["count"], 4);
    assert_eq!(food["locations"][0]["category"], "food");

    server
        .get("/api/v1/locations")
        .add_query_param("category", "gym")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn health_probes_report_ok() {
    let server = campus_server();

    let live: Value = server.get("/health/live").await.json();
    assert_eq!(live["status"], "ok");

    let response = server.get("/health/ready").await;
    response.assert_status_ok();
    let ready: Value = response.json();
    assert_eq!(ready["locations"], 23);
    assert!(ready["waypoints"].as_u64().unwrap_or_default() > 1000);
}

#[tokio::test]
async fn unknown_path_is_problem_json() {
    let server = campus_server();
    let response = server.get("/api/v1/nowhere").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["title"], "Not Found");
}
