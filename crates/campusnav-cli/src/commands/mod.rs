//! Subcommand handlers.
//!
//! `main.rs` parses arguments and dispatches here; each module owns one
//! subcommand.

pub mod graph;
pub mod locations;
pub mod route;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use campusnav_lib::{LocationCatalog, Quantization, RoutingConfig, SegmentCatalog};

/// Environment variable naming a segment catalog JSON file.
pub const SEGMENTS_PATH_ENV: &str = "CAMPUSNAV_SEGMENTS_PATH";
/// Environment variable naming a location catalog JSON file.
pub const LOCATIONS_PATH_ENV: &str = "CAMPUSNAV_LOCATIONS_PATH";

/// Where catalogs come from and how the graph is keyed; shared by every
/// subcommand.
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub segments: Option<PathBuf>,
    pub locations: Option<PathBuf>,
    pub quantize: Option<u32>,
}

impl CatalogSources {
    /// Fill unset paths from the environment.
    pub fn with_env_fallback(mut self) -> Self {
        if self.segments.is_none() {
            self.segments = std::env::var_os(SEGMENTS_PATH_ENV).map(PathBuf::from);
        }
        if self.locations.is_none() {
            self.locations = std::env::var_os(LOCATIONS_PATH_ENV).map(PathBuf::from);
        }
        self
    }

    /// Load the segment catalog, defaulting to the built-in campus network.
    pub fn load_segments(&self) -> Result<SegmentCatalog> {
        match &self.segments {
            Some(path) => {
                debug!(path = %path.display(), "loading segment catalog");
                SegmentCatalog::from_path(path).with_context(|| {
                    format!("failed to load segment catalog from {}", path.display())
                })
            }
            None => Ok(SegmentCatalog::campus()),
        }
    }

    /// Load the location catalog, defaulting to the built-in campus locations.
    pub fn load_locations(&self) -> Result<LocationCatalog> {
        match &self.locations {
            Some(path) => {
                debug!(path = %path.display(), "loading location catalog");
                LocationCatalog::from_path(path).with_context(|| {
                    format!("failed to load location catalog from {}", path.display())
                })
            }
            None => Ok(LocationCatalog::campus()),
        }
    }

    /// Routing configuration from the environment with `--quantize` applied.
    pub fn routing_config(&self) -> Result<RoutingConfig> {
        let mut config =
            RoutingConfig::from_env().context("invalid routing configuration in environment")?;
        if let Some(decimals) = self.quantize {
            config = config.with_quantization(Some(Quantization::new(decimals)));
        }
        Ok(config)
    }
}
