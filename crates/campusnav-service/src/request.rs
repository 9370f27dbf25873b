//! Request bodies and query strings accepted by the API.

use serde::{Deserialize, Serialize};

use campusnav_lib::{LocationCategory, RouteAlgorithm};

use crate::ProblemDetails;

/// Checks a decoded request before any routing work happens. The problem is
/// boxed to keep the `Err` variant small.
pub trait Validate {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Request for a walking route between two endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Origin: location name or `lat,lon`.
    pub from: String,

    /// Destination: location name or `lat,lon`.
    pub to: String,

    /// Overrides the service's configured algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<RouteAlgorithm>,
}

impl Validate for RouteRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.from.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "'from' must name a location or give lat,lon",
                request_id,
            )));
        }

        if self.to.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "'to' must name a location or give lat,lon",
                request_id,
            )));
        }

        Ok(())
    }
}

/// Query string for `GET /api/v1/locations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationsQuery {
    /// Category name, or `all`.
    #[serde(default)]
    pub category: Option<String>,
}

impl LocationsQuery {
    /// Parsed category filter; `None` lists every location.
    pub fn category(
        &self,
        request_id: &str,
    ) -> Result<Option<LocationCategory>, Box<ProblemDetails>> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) if value.eq_ignore_ascii_case("all") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(|_| {
                Box::new(ProblemDetails::bad_request(
                    format!("Unknown location category '{}'", value),
                    request_id,
                ))
            }),
        }
    }
}
