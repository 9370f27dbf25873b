//! Densification of trail geometry into evenly spaced points.
//!
//! Real length is measured with the haversine formula and the points are then
//! placed by linear interpolation in coordinate space. At campus scale the
//! difference between the two is well below the target spacing.

use tracing::debug;

use crate::catalog::{Segment, SegmentCatalog};
use crate::coord::{haversine_distance, Coordinate};

/// Evenly spaced points from `start` to `end` inclusive.
///
/// The number of sub-steps is `floor(distance / spacing_m)`, so the result has
/// `floor(distance / spacing_m) + 1` points with the first exactly `start` and
/// the last exactly `end`. When the pair is closer than one spacing, or the
/// distance is not finite, the result is just `[start, end]`.
pub fn densify_pair(start: Coordinate, end: Coordinate, spacing_m: f64) -> Vec<Coordinate> {
    let total = haversine_distance(start, end);
    let steps = (total / spacing_m).floor();
    if !steps.is_finite() || steps < 1.0 {
        return vec![start, end];
    }

    let steps = steps as usize;
    let mut points = Vec::with_capacity(steps + 1);
    points.push(start);
    for i in 1..steps {
        points.push(start.lerp(&end, i as f64 / steps as f64));
    }
    points.push(end);
    points
}

/// Densify every consecutive pair of a polyline and join the pieces.
///
/// The joint between two consecutive pieces is emitted once. A single
/// coordinate is returned unchanged.
pub fn densify_segment(coordinates: &[Coordinate], spacing_m: f64) -> Vec<Coordinate> {
    match coordinates {
        [] => Vec::new(),
        [only] => vec![*only],
        _ => {
            let mut points = Vec::new();
            for pair in coordinates.windows(2) {
                let piece = densify_pair(pair[0], pair[1], spacing_m);
                let skip = usize::from(!points.is_empty());
                points.extend(piece.into_iter().skip(skip));
            }
            points
        }
    }
}

/// Replace every segment of the catalog with its densified form.
pub fn densify_catalog(catalog: &SegmentCatalog, spacing_m: f64) -> Vec<Segment> {
    let segments: Vec<Segment> = catalog
        .iter()
        .map(|segment| Segment {
            name: segment.name.clone(),
            coordinates: densify_segment(&segment.coordinates, spacing_m),
        })
        .collect();

    debug!(
        segments = segments.len(),
        points = segments.iter().map(|s| s.coordinates.len()).sum::<usize>(),
        spacing_m,
        "densified segment catalog"
    );
    segments
}
