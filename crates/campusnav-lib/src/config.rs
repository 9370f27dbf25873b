//! Routing configuration.
//!
//! # Environment Variables
//!
//! - `CAMPUSNAV_SPACING_M`: target point spacing in metres (default `1.0`)
//! - `CAMPUSNAV_PROXIMITY_DEG`: destination proximity threshold in degrees
//!   (default `0.0002`)
//! - `CAMPUSNAV_ALGORITHM`: `dijkstra` (default) or `a-star`
//! - `CAMPUSNAV_QUANTIZE`: decimal places used to snap waypoint coordinates
//!   (unset keeps exact matching)

use crate::coord::{haversine_distance, Coordinate};
use crate::error::{Error, Result};
use crate::graph::{GraphBuildOptions, Quantization};
use crate::routing::RouteAlgorithm;

/// Default distance between densified points, in metres.
pub const DEFAULT_SPACING_M: f64 = 1.0;

/// Default angular distance at which a route stops following the network
/// and heads straight for the destination (about 22 m).
pub const DEFAULT_PROXIMITY_THRESHOLD_DEG: f64 = 0.0002;

/// Smallest accepted point spacing, in metres. Anything finer multiplies the
/// waypoint count without changing the drawn line.
pub const MIN_SPACING_M: f64 = 0.01;

/// Most decimal places a quantization grid may use; beyond this an `f64`
/// cannot represent the grid and snapping produces NaN.
pub const MAX_QUANTIZE_DECIMALS: u32 = 15;

/// Configuration shared by graph construction and route composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingConfig {
    pub spacing_m: f64,
    pub proximity_threshold_deg: f64,
    pub algorithm: RouteAlgorithm,
    pub quantization: Option<Quantization>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            spacing_m: DEFAULT_SPACING_M,
            proximity_threshold_deg: DEFAULT_PROXIMITY_THRESHOLD_DEG,
            algorithm: RouteAlgorithm::default(),
            quantization: None,
        }
    }
}

impl RoutingConfig {
    /// Create configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("CAMPUSNAV_SPACING_M") {
            config.spacing_m = parse_value("CAMPUSNAV_SPACING_M", &value)?;
        }
        if let Some(value) = lookup("CAMPUSNAV_PROXIMITY_DEG") {
            config.proximity_threshold_deg = parse_value("CAMPUSNAV_PROXIMITY_DEG", &value)?;
        }
        if let Some(value) = lookup("CAMPUSNAV_ALGORITHM") {
            config.algorithm = value.parse().map_err(|_| Error::InvalidConfig {
                key: "CAMPUSNAV_ALGORITHM".to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("CAMPUSNAV_QUANTIZE") {
            let decimals: u32 = parse_value("CAMPUSNAV_QUANTIZE", &value)?;
            config.quantization = Some(Quantization::new(decimals));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_spacing(mut self, spacing_m: f64) -> Self {
        self.spacing_m = spacing_m;
        self
    }

    pub fn with_quantization(mut self, quantization: Option<Quantization>) -> Self {
        self.quantization = quantization;
        self
    }

    /// Check spacing, threshold and quantization are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.spacing_m.is_finite() && self.spacing_m >= MIN_SPACING_M) {
            return Err(Error::InvalidSpacing {
                value: self.spacing_m,
            });
        }
        if !(self.proximity_threshold_deg.is_finite() && self.proximity_threshold_deg >= 0.0) {
            return Err(Error::InvalidThreshold {
                value: self.proximity_threshold_deg,
            });
        }
        if let Some(quantization) = self.quantization {
            if quantization.decimals > MAX_QUANTIZE_DECIMALS {
                return Err(Error::InvalidConfig {
                    key: "quantize".to_string(),
                    value: quantization.decimals.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Proximity threshold converted to metres along a great circle.
    pub fn proximity_threshold_m(&self) -> f64 {
        haversine_distance(
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, self.proximity_threshold_deg),
        )
    }

    pub fn graph_options(&self) -> GraphBuildOptions {
        GraphBuildOptions {
            quantization: self.quantization,
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    })
}
