//! Route composition for campus walking directions.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported shortest-path algorithms (Dijkstra, A*)
//! - [`Route`] - Rendering-ready polyline from origin to destination
//! - [`Router`] - Build-once handle owning the waypoint graph
//! - [`compute_route`] - Main entry point for computing routes
//!
//! # Example
//!
//! ```
//! use campusnav_lib::{Coordinate, Router, RoutingConfig, SegmentCatalog};
//!
//! let router = Router::build(&SegmentCatalog::campus(), RoutingConfig::default())?;
//! let route = router.compute_route(
//!     Coordinate::new(13.031966, 80.181146),
//!     Coordinate::new(13.03333, 80.18138),
//! );
//! assert!(route.point_count() >= 2);
//! # Ok::<(), campusnav_lib::Error>(())
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::SegmentCatalog;
use crate::config::RoutingConfig;
use crate::coord::{haversine_distance, Coordinate};
use crate::densify::{densify_catalog, densify_pair};
use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph, WaypointKey};
use crate::nearest::nearest_waypoint;

/// Supported shortest-path algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm with linear-scan extraction.
    #[default]
    Dijkstra,
    /// A* search guided by straight-line distance.
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            "a-star" | "astar" | "a_star" => Ok(RouteAlgorithm::AStar),
            _ => Err(Error::InvalidConfig {
                key: "algorithm".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// How a route was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// Follows the trail network.
    Network,
    /// Straight line; no network path connects the endpoints.
    Direct,
}

/// Ordered point sequence for rendering as a line overlay.
///
/// Always starts at the exact origin, ends at the exact destination, and
/// holds at least two points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    points: Vec<Coordinate>,
    kind: RouteKind,
    waypoints: usize,
}

impl Route {
    /// Two-point fallback from `origin` straight to `destination`.
    pub fn direct(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            points: vec![origin, destination],
            kind: RouteKind::Direct,
            waypoints: 0,
        }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// Number of graph waypoints the route passes through.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn origin(&self) -> Coordinate {
        self.points[0]
    }

    pub fn destination(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }

    /// Walking length in metres.
    pub fn length_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine_distance(pair[0], pair[1]))
            .sum()
    }
}

/// Build-once routing handle.
///
/// Densifies the catalog and builds the waypoint graph up front; afterwards
/// it is read-only and can be cloned cheaply across threads.
#[derive(Debug, Clone)]
pub struct Router {
    graph: Graph,
    config: RoutingConfig,
}

impl Router {
    /// Densify `catalog` and build the graph used by every later query.
    pub fn build(catalog: &SegmentCatalog, config: RoutingConfig) -> Result<Self> {
        config.validate()?;
        let segments = densify_catalog(catalog, config.spacing_m);
        let graph = build_graph(&segments, &config.graph_options());
        let stats = graph.stats();
        info!(
            segments = catalog.len(),
            waypoints = stats.waypoints,
            edges = stats.edges,
            components = stats.components,
            "routing graph ready"
        );
        Ok(Self { graph, config })
    }

    /// Wrap an already built graph.
    pub fn from_graph(graph: Graph, config: RoutingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Compute a walking route with the configured algorithm.
    pub fn compute_route(&self, origin: Coordinate, destination: Coordinate) -> Route {
        compute_route(&self.graph, origin, destination, &self.config)
    }

    /// Compute a walking route with an explicit algorithm.
    pub fn compute_route_with(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        algorithm: RouteAlgorithm,
    ) -> Route {
        let config = self.config.with_algorithm(algorithm);
        compute_route(&self.graph, origin, destination, &config)
    }
}

/// Compute a walking route between two arbitrary coordinates.
///
/// Both endpoints are snapped to their nearest waypoints for the graph search,
/// but the returned route starts and ends at the exact inputs. Once a
/// waypoint comes within the proximity threshold of the destination the route
/// leaves the network and heads straight there. An empty graph or a missing
/// network path yields [`Route::direct`].
pub fn compute_route(
    graph: &Graph,
    origin: Coordinate,
    destination: Coordinate,
    config: &RoutingConfig,
) -> Route {
    let (Some(start), Some(goal)) = (
        nearest_waypoint(graph, origin),
        nearest_waypoint(graph, destination),
    ) else {
        warn!("waypoint graph is empty, using direct route");
        return Route::direct(origin, destination);
    };

    let planner = select_planner(config.algorithm);
    let path = match planner.find_path(graph, start, goal) {
        Some(path) if !path.is_empty() => path,
        _ => {
            warn!(
                %origin,
                %destination,
                algorithm = %planner.algorithm(),
                "no network path between endpoints, using direct route"
            );
            return Route::direct(origin, destination);
        }
    };

    let spacing = config.spacing_m;
    let threshold_m = config.proximity_threshold_m();
    let near_destination =
        |key: WaypointKey| haversine_distance(key.coordinate(), destination) <= threshold_m;

    let mut points = vec![origin];
    let first = path[0];
    if near_destination(first) {
        append_points(
            &mut points,
            densify_pair(first.coordinate(), destination, spacing),
        );
        return network_route(points, 1);
    }

    for (hop, pair) in path.windows(2).enumerate() {
        append_points(
            &mut points,
            densify_pair(pair[0].coordinate(), pair[1].coordinate(), spacing),
        );
        if near_destination(pair[1]) {
            append_points(
                &mut points,
                densify_pair(pair[1].coordinate(), destination, spacing),
            );
            return network_route(points, hop + 2);
        }
    }

    let last = points[points.len() - 1];
    if points.len() == 1 || last != destination {
        append_points(&mut points, densify_pair(last, destination, spacing));
    }
    network_route(points, path.len())
}

fn network_route(points: Vec<Coordinate>, waypoints: usize) -> Route {
    debug!(points = points.len(), waypoints, "composed network route");
    Route {
        points,
        kind: RouteKind::Network,
        waypoints,
    }
}

/// Append `piece`, dropping its first point when it repeats the current end.
fn append_points(route: &mut Vec<Coordinate>, piece: Vec<Coordinate>) {
    let mut piece = piece.into_iter().peekable();
    if let (Some(last), Some(first)) = (route.last(), piece.peek()) {
        if last == first {
            piece.next();
        }
    }
    route.extend(piece);
}
