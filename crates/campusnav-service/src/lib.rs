//! HTTP service for campus walking directions.
//!
//! - [`AppState`]: catalogs and the prebuilt routing graph
//! - [`health`]: liveness and readiness probes
//! - [`ProblemDetails`]: RFC 9457 error responses
//! - [`ServiceResponse`]: wrapper for successful responses
//! - [`logging`]: JSON or text log output
//!
//! Handlers are thin: they parse and validate the request, call
//! `campusnav-lib`, and format the response.

mod handlers;
mod health;
pub mod logging;
mod problem;
mod request;
mod response;
mod state;

use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handlers::{locations_handler, route_handler, LocationsResponse, RouteResponse};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_UNKNOWN_LOCATION,
};
pub use request::{LocationsQuery, RouteRequest, Validate};
pub use response::ServiceResponse;
pub use state::{AppState, AppStateError, LOCATIONS_PATH_ENV, SEGMENTS_PATH_ENV};

/// Build the axum application for `state`.
pub fn app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/api/v1/route", post(route_handler))
        .route("/api/v1/locations", get(locations_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
