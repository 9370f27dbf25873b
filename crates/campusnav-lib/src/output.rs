use std::fmt::Write;

use serde::Serialize;
use serde_json::{json, Value};

use crate::coord::Coordinate;
use crate::error::Result;
use crate::routing::{Route, RouteAlgorithm, RouteKind};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Header and totals only.
    PlainText,
    /// Header, totals, and every polyline point.
    Detailed,
}

/// Endpoint of a computed route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub label: String,
    pub coordinate: Coordinate,
}

impl RouteEndpoint {
    pub fn new(label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            label: label.into(),
            coordinate,
        }
    }
}

/// Structured representation of a route that the CLI and the HTTP service
/// serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub kind: RouteKind,
    pub origin: RouteEndpoint,
    pub destination: RouteEndpoint,
    pub waypoints: usize,
    pub point_count: usize,
    pub length_m: f64,
    pub points: Vec<Coordinate>,
}

impl RouteSummary {
    pub fn from_route(
        route: &Route,
        algorithm: RouteAlgorithm,
        origin_label: impl Into<String>,
        destination_label: impl Into<String>,
    ) -> Self {
        Self {
            algorithm,
            kind: route.kind(),
            origin: RouteEndpoint::new(origin_label, route.origin()),
            destination: RouteEndpoint::new(destination_label, route.destination()),
            waypoints: route.waypoint_count(),
            point_count: route.point_count(),
            length_m: route.length_m(),
            points: route.points().to_vec(),
        }
    }

    pub fn render(&self, mode: RouteRenderMode) -> String {
        let mut buffer = String::new();
        let via = match self.kind {
            RouteKind::Network => "walking network",
            RouteKind::Direct => "direct line",
        };
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({}; algorithm: {}):",
            self.origin.label, self.destination.label, via, self.algorithm
        );
        let _ = writeln!(buffer, "  Distance:  {:.0} m", self.length_m);
        let _ = writeln!(buffer, "  Waypoints: {}", self.waypoints);
        let _ = writeln!(buffer, "  Points:    {}", self.point_count);

        if mode == RouteRenderMode::Detailed {
            for (index, point) in self.points.iter().enumerate() {
                let _ = writeln!(buffer, "{index:>6}: {point}");
            }
        }
        buffer
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// GeoJSON `Feature` with a `LineString` geometry.
    ///
    /// GeoJSON orders positions as `[lon, lat]`, the reverse of the catalog
    /// format.
    pub fn to_geojson(&self) -> Value {
        let coordinates: Vec<[f64; 2]> = self
            .points
            .iter()
            .map(|point| [point.lon, point.lat])
            .collect();
        json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": {
                "origin": self.origin.label,
                "destination": self.destination.label,
                "algorithm": self.algorithm,
                "kind": self.kind,
                "waypoints": self.waypoints,
                "length_m": self.length_m,
            },
        })
    }
}
