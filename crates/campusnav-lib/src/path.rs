use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::coord::planar_distance;
use crate::graph::{Graph, WaypointKey};

/// Run Dijkstra's algorithm with planar edge weights.
///
/// Extraction is a linear scan over the unvisited waypoints, which keeps the
/// tie-break deterministic (lowest insertion index wins) at O(|V|²) cost.
/// Returns `Some(vec![start])` when `start == goal` and `None` when either key
/// is unknown or the goal is unreachable.
pub fn find_route_dijkstra(
    graph: &Graph,
    start: WaypointKey,
    goal: WaypointKey,
) -> Option<Vec<WaypointKey>> {
    let start_idx = graph.index_of(start)?;
    let goal_idx = graph.index_of(goal)?;
    if start_idx == goal_idx {
        return Some(vec![start]);
    }

    let waypoints = graph.waypoints();
    let mut distances = vec![f64::INFINITY; waypoints.len()];
    let mut parents: Vec<Option<usize>> = vec![None; waypoints.len()];
    let mut visited = vec![false; waypoints.len()];
    distances[start_idx] = 0.0;

    loop {
        let mut current = None;
        let mut best = f64::INFINITY;
        for (idx, &distance) in distances.iter().enumerate() {
            if !visited[idx] && distance < best {
                best = distance;
                current = Some(idx);
            }
        }

        // None: every remaining waypoint is unreachable.
        let current = current?;
        if current == goal_idx {
            return Some(reconstruct_path(graph, &parents, start_idx, goal_idx));
        }
        visited[current] = true;

        let origin = waypoints[current].coordinate;
        for neighbour in &waypoints[current].neighbours {
            let Some(next) = graph.index_of(*neighbour) else {
                continue;
            };
            if visited[next] {
                continue;
            }
            let candidate = best + planar_distance(origin, waypoints[next].coordinate);
            if candidate < distances[next] {
                distances[next] = candidate;
                parents[next] = Some(current);
            }
        }
    }
}

/// Run A* search with the planar straight-line distance as heuristic.
///
/// The heuristic never overestimates planar edge weights, so the result has
/// the same cost as [`find_route_dijkstra`].
pub fn find_route_a_star(
    graph: &Graph,
    start: WaypointKey,
    goal: WaypointKey,
) -> Option<Vec<WaypointKey>> {
    let start_idx = graph.index_of(start)?;
    let goal_idx = graph.index_of(goal)?;
    if start_idx == goal_idx {
        return Some(vec![start]);
    }

    let waypoints = graph.waypoints();
    let target = waypoints[goal_idx].coordinate;
    let mut g_score = vec![f64::INFINITY; waypoints.len()];
    let mut parents: Vec<Option<usize>> = vec![None; waypoints.len()];
    let mut queue = BinaryHeap::new();

    g_score[start_idx] = 0.0;
    queue.push(AStarEntry::new(
        start_idx,
        0.0,
        planar_distance(waypoints[start_idx].coordinate, target),
    ));

    while let Some(entry) = queue.pop() {
        let current_score = g_score[entry.node];
        if entry.cost.0 > current_score {
            continue;
        }

        if entry.node == goal_idx {
            return Some(reconstruct_path(graph, &parents, start_idx, goal_idx));
        }

        let origin = waypoints[entry.node].coordinate;
        for neighbour in &waypoints[entry.node].neighbours {
            let Some(next) = graph.index_of(*neighbour) else {
                continue;
            };
            let position = waypoints[next].coordinate;
            let tentative_g = current_score + planar_distance(origin, position);
            if tentative_g < g_score[next] {
                g_score[next] = tentative_g;
                parents[next] = Some(entry.node);
                queue.push(AStarEntry::new(
                    next,
                    tentative_g,
                    planar_distance(position, target),
                ));
            }
        }
    }

    None
}

fn reconstruct_path(
    graph: &Graph,
    parents: &[Option<usize>],
    start: usize,
    goal: usize,
) -> Vec<WaypointKey> {
    let waypoints = graph.waypoints();
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(waypoints[node].key);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: usize,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: usize, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
