//! Error bodies in the `application/problem+json` shape of RFC 9457.

use std::fmt;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use campusnav_lib::Error as LibError;

/// Problem type URI for unknown location names.
pub const PROBLEM_UNKNOWN_LOCATION: &str = "/problems/unknown-location";

/// Problem type URI for a request body or query that fails validation.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for failures the caller cannot fix.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// RFC 9457 Problem Details response body.
///
/// # Example
///
/// ```
/// use campusnav_service::{ProblemDetails, PROBLEM_UNKNOWN_LOCATION};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_UNKNOWN_LOCATION,
///     "Unknown Location",
///     StatusCode::NOT_FOUND,
/// )
/// .with_detail("Location 'Libary' not found. Did you mean: Library?")
/// .with_request_id("req-12345");
/// assert_eq!(problem.status, 404);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Relative problem type, e.g. `/problems/unknown-location`.
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Fixed title for the problem type.
    pub title: String,

    pub status: u16,

    /// Explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Request identifier for this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Up to three close location names, present for unknown locations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ProblemDetails {
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// 400 Bad Request for invalid input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// 404 Not Found for a location name missing from the catalog.
    pub fn unknown_location(
        name: &str,
        suggestions: &[String],
        request_id: impl Into<String>,
    ) -> Self {
        let detail = if suggestions.is_empty() {
            format!("Location '{}' not found", name)
        } else {
            format!(
                "Location '{}' not found. Did you mean: {}?",
                name,
                suggestions.join(", ")
            )
        };

        let mut problem = Self::new(
            PROBLEM_UNKNOWN_LOCATION,
            "Unknown Location",
            StatusCode::NOT_FOUND,
        )
        .with_detail(detail)
        .with_request_id(request_id);
        problem.suggestions = suggestions.to_vec();
        problem
    }

    /// 500 Internal Server Error.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({}): {}", self.title, self.status, detail),
            None => write!(f, "{} ({})", self.title, self.status),
        }
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
            Json(self),
        )
            .into_response()
    }
}

/// Map a library error onto a problem: unknown names are 404, rejected input
/// is 400, and anything else is a 500.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::UnknownLocation { name, suggestions } => {
            ProblemDetails::unknown_location(name, suggestions, request_id)
        }
        LibError::InvalidCoordinate { .. }
        | LibError::InvalidSpacing { .. }
        | LibError::InvalidThreshold { .. }
        | LibError::InvalidConfig { .. } => {
            ProblemDetails::bad_request(error.to_string(), request_id)
        }
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}
