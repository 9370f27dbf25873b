//! Geographic coordinates and the two distance measures used by the router.
//!
//! Planar Euclidean distance in degree space orders graph edges and nearest
//! waypoint candidates; it is only meaningful for comparisons. Haversine
//! distance in metres is used wherever a real-world length is required
//! (densification spacing, the destination proximity threshold, route
//! length).

use std::fmt;
use std::str::FromStr;

use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable latitude/longitude pair in decimal degrees.
///
/// Serialised as a `[lat, lon]` array to match the catalog format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in metres.
    pub fn haversine_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(*self, *other)
    }

    /// Straight-line distance to `other` in degree space.
    pub fn planar_to(&self, other: &Coordinate) -> f64 {
        planar_distance(*self, *other)
    }

    /// Linear interpolation in coordinate space; `fraction` 0 yields `self`.
    pub fn lerp(&self, other: &Coordinate, fraction: f64) -> Coordinate {
        Coordinate {
            lat: self.lat + (other.lat - self.lat) * fraction,
            lon: self.lon + (other.lon - self.lon) * fraction,
        }
    }

    /// Parse a `lat,lon` pair such as `13.0319,80.1811`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidCoordinate {
            input: input.to_string(),
        };
        let (lat, lon) = input.split_once(',').ok_or_else(invalid)?;
        let lat = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let lon = lon.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Self { lat, lon })
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lat, coord.lon]
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lon)
    }
}

/// Great-circle distance between two coordinates in metres.
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    Haversine.distance(a.to_point(), b.to_point())
}

/// Euclidean distance between two coordinates treated as planar points.
pub fn planar_distance(a: Coordinate, b: Coordinate) -> f64 {
    (b.lat - a.lat).hypot(b.lon - a.lon)
}
