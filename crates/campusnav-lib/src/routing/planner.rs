//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and implementations for the
//! supported shortest-path algorithms. The composer only talks to the trait,
//! so new algorithms can be added without touching route stitching.

use crate::graph::{Graph, WaypointKey};
use crate::path::{find_route_a_star, find_route_dijkstra};

use super::RouteAlgorithm;

/// Trait for shortest-path strategies over the waypoint graph.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(
        &self,
        graph: &Graph,
        start: WaypointKey,
        goal: WaypointKey,
    ) -> Option<Vec<WaypointKey>>;
}

/// Dijkstra's algorithm with linear-scan extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: WaypointKey,
        goal: WaypointKey,
    ) -> Option<Vec<WaypointKey>> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// Heap-based A* guided by straight-line distance to the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: WaypointKey,
        goal: WaypointKey,
    ) -> Option<Vec<WaypointKey>> {
        find_route_a_star(graph, start, goal)
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dijkstra_planner_returns_correct_algorithm() {
        assert_eq!(DijkstraPlanner.algorithm(), RouteAlgorithm::Dijkstra);
    }

    #[test]
    fn astar_planner_returns_correct_algorithm() {
        assert_eq!(AStarPlanner.algorithm(), RouteAlgorithm::AStar);
    }

    #[test]
    fn select_planner_chooses_correct_type() {
        for algorithm in [RouteAlgorithm::Dijkstra, RouteAlgorithm::AStar] {
            assert_eq!(select_planner(algorithm).algorithm(), algorithm);
        }
    }
}
