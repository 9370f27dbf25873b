use crate::coord::{planar_distance, Coordinate};
use crate::graph::{Graph, WaypointKey};

/// Find the waypoint closest to `target` by planar distance.
///
/// Scans every waypoint in insertion order and keeps the first strict
/// minimum, so ties resolve to the earliest waypoint. Returns `None` only for
/// an empty graph (or when every distance is NaN).
pub fn nearest_waypoint(graph: &Graph, target: Coordinate) -> Option<WaypointKey> {
    let mut best: Option<(WaypointKey, f64)> = None;
    for waypoint in graph.waypoints() {
        let distance = planar_distance(target, waypoint.coordinate);
        match best {
            Some((_, current)) if distance >= current => {}
            _ if distance.is_nan() => {}
            _ => best = Some((waypoint.key, distance)),
        }
    }
    best.map(|(key, _)| key)
}
