use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::Segment;
use crate::config::MAX_QUANTIZE_DECIMALS;
use crate::coord::Coordinate;

/// Exact identity of a waypoint derived from its coordinate bits.
///
/// Two coordinates map to the same key only if both components are
/// numerically identical; `-0.0` is folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaypointKey {
    lat_bits: u64,
    lon_bits: u64,
}

impl WaypointKey {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            lat_bits: canonical_bits(coordinate.lat),
            lon_bits: canonical_bits(coordinate.lon),
        }
    }

    /// Coordinate this key was derived from.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(f64::from_bits(self.lat_bits), f64::from_bits(self.lon_bits))
    }
}

impl From<Coordinate> for WaypointKey {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate)
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Snap coordinates to a decimal grid before keying.
///
/// Off by default: segments must then share bit-identical junction
/// coordinates or the network silently fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantization {
    pub decimals: u32,
}

impl Quantization {
    pub fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    /// Snap to the grid. Decimals past [`MAX_QUANTIZE_DECIMALS`] are clamped.
    pub fn apply(&self, coordinate: Coordinate) -> Coordinate {
        let scale = 10f64.powi(self.decimals.min(MAX_QUANTIZE_DECIMALS) as i32);
        Coordinate::new(
            (coordinate.lat * scale).round() / scale,
            (coordinate.lon * scale).round() / scale,
        )
    }
}

/// Options for graph construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuildOptions {
    pub quantization: Option<Quantization>,
}

/// Node of the walking graph.
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub key: WaypointKey,
    pub coordinate: Coordinate,
    pub neighbours: Vec<WaypointKey>,
}

/// Summary counts for a built graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub waypoints: usize,
    pub edges: usize,
    pub components: usize,
}

#[derive(Debug, Default)]
struct GraphInner {
    waypoints: Vec<Waypoint>,
    index: HashMap<WaypointKey, usize>,
}

/// Undirected waypoint graph used by the route planner.
///
/// Waypoints keep their insertion order so every scan over the graph is
/// deterministic. Cloning shares the underlying storage.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: Arc<GraphInner>,
}

impl Graph {
    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.inner.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.waypoints.is_empty()
    }

    /// Waypoints in insertion order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.inner.waypoints
    }

    pub fn get(&self, key: WaypointKey) -> Option<&Waypoint> {
        self.index_of(key).map(|idx| &self.inner.waypoints[idx])
    }

    pub fn contains(&self, key: WaypointKey) -> bool {
        self.inner.index.contains_key(&key)
    }

    /// Return the neighbours for a given waypoint.
    pub fn neighbours(&self, key: WaypointKey) -> &[WaypointKey] {
        self.get(key)
            .map(|waypoint| waypoint.neighbours.as_slice())
            .unwrap_or(&[])
    }

    /// Position of a waypoint in insertion order.
    pub(crate) fn index_of(&self, key: WaypointKey) -> Option<usize> {
        self.inner.index.get(&key).copied()
    }

    pub fn stats(&self) -> GraphStats {
        let waypoints = self.len();
        let edges = self
            .inner
            .waypoints
            .iter()
            .map(|w| w.neighbours.len())
            .sum::<usize>()
            / 2;

        let mut seen = vec![false; waypoints];
        let mut components = 0;
        let mut stack = Vec::new();
        for start in 0..waypoints {
            if seen[start] {
                continue;
            }
            components += 1;
            seen[start] = true;
            stack.push(start);
            while let Some(idx) = stack.pop() {
                for neighbour in &self.inner.waypoints[idx].neighbours {
                    if let Some(next) = self.index_of(*neighbour) {
                        if !seen[next] {
                            seen[next] = true;
                            stack.push(next);
                        }
                    }
                }
            }
        }

        GraphStats {
            waypoints,
            edges,
            components,
        }
    }
}

/// Build the waypoint graph from densified segments.
///
/// Every consecutive pair of coordinates within a segment becomes a symmetric
/// connection. Consecutive identical coordinates do not form self-loops.
pub fn build_graph(segments: &[Segment], options: &GraphBuildOptions) -> Graph {
    let mut inner = GraphInner::default();

    for segment in segments {
        let mut previous: Option<usize> = None;
        for &raw in &segment.coordinates {
            let coordinate = match options.quantization {
                Some(q) => q.apply(raw),
                None => raw,
            };
            let current = inner.insert(coordinate);
            if let Some(prev) = previous {
                inner.connect(prev, current);
            }
            previous = Some(current);
        }
    }

    let graph = Graph {
        inner: Arc::new(inner),
    };
    debug!(
        waypoints = graph.len(),
        quantized = options.quantization.is_some(),
        "built waypoint graph"
    );
    graph
}

impl GraphInner {
    fn insert(&mut self, coordinate: Coordinate) -> usize {
        let key = WaypointKey::new(coordinate);
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.waypoints.len();
        self.waypoints.push(Waypoint {
            key,
            coordinate: key.coordinate(),
            neighbours: Vec::new(),
        });
        self.index.insert(key, idx);
        idx
    }

    fn connect(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let key_a = self.waypoints[a].key;
        let key_b = self.waypoints[b].key;
        if !self.waypoints[a].neighbours.contains(&key_b) {
            self.waypoints[a].neighbours.push(key_b);
        }
        if !self.waypoints[b].neighbours.contains(&key_a) {
            self.waypoints[b].neighbours.push(key_a);
        }
    }
}
