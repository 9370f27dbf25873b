//! Route and location handlers.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use campusnav_lib::{Endpoint, Location, RouteSummary};

use crate::problem::from_lib_error;
use crate::request::{LocationsQuery, RouteRequest, Validate};
use crate::{AppState, ProblemDetails, ServiceResponse, PROBLEM_INVALID_REQUEST};

/// Body of a successful route response.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    #[serde(flatten)]
    pub summary: RouteSummary,
    /// Same route as a GeoJSON `Feature` for map overlays.
    pub geojson: Value,
}

/// Body of a location listing.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub count: usize,
    pub locations: Vec<Location>,
}

/// Handle POST /api/v1/route requests.
pub async fn route_handler(
    State(state): State<AppState>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Response {
    let request_id = generate_request_id();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(request_id = %request_id, error = %rejection, "rejected route request body");
            return body_rejection(&rejection, &request_id).into_response();
        }
    };

    info!(
        request_id = %request_id,
        from = %request.from,
        to = %request.to,
        algorithm = ?request.algorithm,
        "handling route request"
    );

    if let Err(problem) = request.validate(&request_id) {
        return (*problem).into_response();
    }

    let locations = state.locations();
    let resolved = Endpoint::parse(&request.from)
        .resolve(locations)
        .and_then(|from| Ok((from, Endpoint::parse(&request.to).resolve(locations)?)));
    let ((origin_label, origin), (destination_label, destination)) = match resolved {
        Ok(pair) => pair,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "endpoint resolution failed");
            return from_lib_error(&e, &request_id).into_response();
        }
    };

    let router = state.router();
    let algorithm = request.algorithm.unwrap_or(router.config().algorithm);
    let route = router.compute_route_with(origin, destination, algorithm);
    let summary = RouteSummary::from_route(&route, algorithm, origin_label, destination_label);

    info!(
        request_id = %request_id,
        kind = ?summary.kind,
        points = summary.point_count,
        length_m = summary.length_m,
        "route computed"
    );

    let geojson = summary.to_geojson();
    (
        StatusCode::OK,
        ServiceResponse::new(RouteResponse { summary, geojson }),
    )
        .into_response()
}

/// Handle GET /api/v1/locations requests.
pub async fn locations_handler(
    State(state): State<AppState>,
    Query(query): Query<LocationsQuery>,
) -> Response {
    let request_id = generate_request_id();
    let category = match query.category(&request_id) {
        Ok(category) => category,
        Err(problem) => return (*problem).into_response(),
    };

    let locations: Vec<Location> = state
        .locations()
        .filter(category)
        .into_iter()
        .cloned()
        .collect();
    ServiceResponse::new(LocationsResponse {
        count: locations.len(),
        locations,
    })
    .into_response()
}

/// Problem for a body axum could not decode, keeping axum's status (400, 415
/// or 422).
fn body_rejection(rejection: &JsonRejection, request_id: &str) -> ProblemDetails {
    ProblemDetails::new(
        PROBLEM_INVALID_REQUEST,
        "Invalid Request",
        rejection.status(),
    )
    .with_detail(rejection.body_text())
    .with_request_id(request_id)
}

/// Fallback for unknown paths.
pub async fn not_found() -> ProblemDetails {
    ProblemDetails::new(
        "/problems/not-found",
        "Not Found",
        StatusCode::NOT_FOUND,
    )
    .with_request_id(generate_request_id())
}

/// Generate a request ID for tracing.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();

    format!("req-{:x}", timestamp)
}
