//! Application state shared by axum handlers.
//!
//! The routing graph is built once when the state is created and is read-only
//! afterwards; handlers only clone the `Arc`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use campusnav_lib::{Error as LibError, LocationCatalog, Router, RoutingConfig, SegmentCatalog};

/// Environment variable naming a segment catalog JSON file.
pub const SEGMENTS_PATH_ENV: &str = "CAMPUSNAV_SEGMENTS_PATH";
/// Environment variable naming a location catalog JSON file.
pub const LOCATIONS_PATH_ENV: &str = "CAMPUSNAV_LOCATIONS_PATH";

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Routing configuration in the environment is invalid.
    Config(LibError),

    /// A catalog file could not be loaded.
    CatalogLoad { path: PathBuf, source: LibError },

    /// The routing graph could not be built.
    GraphBuild(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid routing configuration: {}", e),
            Self::CatalogLoad { path, source } => {
                write!(f, "failed to load catalog {}: {}", path.display(), source)
            }
            Self::GraphBuild(e) => write!(f, "failed to build routing graph: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) | Self::GraphBuild(e) => Some(e),
            Self::CatalogLoad { source, .. } => Some(source),
        }
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable; share it through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    router: Router,
    locations: LocationCatalog,
}

impl AppState {
    /// Load catalogs and configuration from the environment and build the
    /// routing graph. Unset catalog paths fall back to the built-in campus
    /// data.
    pub fn from_env() -> Result<Self, AppStateError> {
        let config = RoutingConfig::from_env().map_err(AppStateError::Config)?;
        let segments_path = std::env::var_os(SEGMENTS_PATH_ENV).map(PathBuf::from);
        let locations_path = std::env::var_os(LOCATIONS_PATH_ENV).map(PathBuf::from);
        Self::load(segments_path.as_deref(), locations_path.as_deref(), config)
    }

    /// Load catalogs from optional file paths and build the routing graph.
    pub fn load(
        segments_path: Option<&Path>,
        locations_path: Option<&Path>,
        config: RoutingConfig,
    ) -> Result<Self, AppStateError> {
        let segments = match segments_path {
            Some(path) => {
                info!(path = %path.display(), "loading segment catalog");
                SegmentCatalog::from_path(path).map_err(|source| AppStateError::CatalogLoad {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => SegmentCatalog::campus(),
        };
        let locations = match locations_path {
            Some(path) => {
                info!(path = %path.display(), "loading location catalog");
                LocationCatalog::from_path(path).map_err(|source| AppStateError::CatalogLoad {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => LocationCatalog::campus(),
        };

        let router = Router::build(&segments, config).map_err(AppStateError::GraphBuild)?;
        Ok(Self::from_parts(router, locations))
    }

    /// Create application state from pre-built components.
    pub fn from_parts(router: Router, locations: LocationCatalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { router, locations }),
        }
    }

    pub fn router(&self) -> &Router {
        &self.inner.router
    }

    pub fn locations(&self) -> &LocationCatalog {
        &self.inner.locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_defaults_to_campus_catalogs() {
        let state = AppState::load(None, None, RoutingConfig::default()).expect("state loads");
        assert_eq!(state.locations().len(), 23);
        assert!(!state.router().graph().is_empty());
    }

    #[test]
    fn missing_catalog_file_names_the_path() {
        let err = AppState::load(
            Some(Path::new("/nonexistent/segments.json")),
            None,
            RoutingConfig::default(),
        )
        .err()
        .expect("missing file");
        assert!(err.to_string().contains("/nonexistent/segments.json"));
    }

    #[test]
    fn invalid_config_fails_graph_build() {
        let err = AppState::load(None, None, RoutingConfig::default().with_spacing(0.0))
            .err()
            .expect("invalid spacing");
        assert!(matches!(err, AppStateError::GraphBuild(_)));
    }
}
