//! Health check handlers for liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");
const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health status response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" or "not_ready: <reason>".
    pub status: String,

    pub service: String,

    pub version: String,

    /// Waypoints in the routing graph (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<usize>,

    /// Locations in the catalog (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<usize>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            waypoints: None,
            locations: None,
        }
    }

    pub fn ready(service: &str, version: &str, waypoints: usize, locations: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            waypoints: Some(waypoints),
            locations: Some(locations),
        }
    }

    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {reason}"),
            service: service.to_string(),
            version: version.to_string(),
            waypoints: None,
            locations: None,
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"campusnav-service","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    Json(HealthStatus::alive(SERVICE_NAME, SERVICE_VERSION))
}

/// Readiness probe handler. Reports 503 when the routing graph is empty, since
/// every route would then be a straight line.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let waypoints = state.router().graph().len();
    let (code, status) = if waypoints == 0 {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            HealthStatus::not_ready(SERVICE_NAME, SERVICE_VERSION, "routing graph is empty"),
        )
    } else {
        (
            StatusCode::OK,
            HealthStatus::ready(
                SERVICE_NAME,
                SERVICE_VERSION,
                waypoints,
                state.locations().len(),
            ),
        )
    };
    (code, Json(status)).into_response()
}
