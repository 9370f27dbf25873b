//! Campus Navigator library entry points.
//!
//! This crate exposes the static trail and location catalogs, densifies the
//! trail network into a waypoint graph, and composes walkable routes between
//! arbitrary coordinates. Higher-level consumers (CLI, HTTP service) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.

pub mod catalog;
pub mod config;
pub mod coord;
pub mod densify;
pub mod error;
pub mod graph;
pub mod locations;
pub mod nearest;
pub mod output;
pub mod path;
pub mod routing;

pub use catalog::{Segment, SegmentCatalog};
pub use config::{
    RoutingConfig, DEFAULT_PROXIMITY_THRESHOLD_DEG, DEFAULT_SPACING_M, MAX_QUANTIZE_DECIMALS,
    MIN_SPACING_M,
};
pub use coord::{haversine_distance, planar_distance, Coordinate};
pub use densify::{densify_catalog, densify_pair, densify_segment};
pub use error::{Error, Result};
pub use graph::{build_graph, Graph, GraphBuildOptions, GraphStats, Quantization, Waypoint, WaypointKey};
pub use locations::{Endpoint, Location, LocationCatalog, LocationCategory};
pub use nearest::nearest_waypoint;
pub use output::{RouteEndpoint, RouteRenderMode, RouteSummary};
pub use path::{find_route_a_star, find_route_dijkstra};
pub use routing::{compute_route, Route, RouteAlgorithm, RouteKind, Router};
