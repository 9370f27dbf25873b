use campusnav_lib::{
    build_graph, densify_catalog, densify_pair, densify_segment, haversine_distance, Coordinate,
    GraphBuildOptions, SegmentCatalog, DEFAULT_SPACING_M,
};

#[test]
fn campus_graph_connections_are_symmetric() {
    let segments = densify_catalog(&SegmentCatalog::campus(), DEFAULT_SPACING_M);
    let graph = build_graph(&segments, &GraphBuildOptions::default());
    assert!(!graph.is_empty());

    for waypoint in graph.waypoints() {
        for neighbour in &waypoint.neighbours {
            assert_ne!(*neighbour, waypoint.key, "self-loop at {}", waypoint.coordinate);
            assert!(
                graph.neighbours(*neighbour).contains(&waypoint.key),
                "{} -> {} is one-way",
                waypoint.coordinate,
                neighbour.coordinate()
            );
        }
    }
}

#[test]
fn campus_graph_is_a_single_network() {
    let segments = densify_catalog(&SegmentCatalog::campus(), DEFAULT_SPACING_M);
    let stats = build_graph(&segments, &GraphBuildOptions::default()).stats();
    assert_eq!(stats.components, 1);
    assert!(stats.waypoints > 1000);
    assert!(stats.edges >= stats.waypoints - 1);
}

#[test]
fn eleven_metre_segment_densifies_to_about_a_dozen_points() {
    let start = Coordinate::new(0.0, 0.0);
    let end = Coordinate::new(0.0, 0.0001);
    let points = densify_segment(&[start, end], 1.0);

    assert!(
        (11..=12).contains(&points.len()),
        "got {} points",
        points.len()
    );
    assert_eq!(points.first(), Some(&start));
    assert_eq!(points.last(), Some(&end));
}

#[test]
fn densified_count_is_floor_of_distance_over_spacing_plus_one() {
    let catalog = SegmentCatalog::campus();
    for spacing in [1.0, 2.5, 7.0] {
        for segment in catalog.iter() {
            let start = segment.coordinates[0];
            let end = segment.coordinates[segment.coordinates.len() - 1];
            let distance = haversine_distance(start, end);
            let points = densify_pair(start, end, spacing);

            let expected = if distance < spacing {
                2
            } else {
                (distance / spacing).floor() as usize + 1
            };
            assert_eq!(points.len(), expected, "{} at {spacing} m", segment.name);
            assert_eq!(points[0], start);
            assert_eq!(points[points.len() - 1], end);
        }
    }
}

#[test]
fn densified_segments_keep_junctions_exact() {
    let catalog = SegmentCatalog::campus();
    let densified = densify_catalog(&catalog, DEFAULT_SPACING_M);
    for (raw, dense) in catalog.iter().zip(&densified) {
        assert_eq!(raw.name, dense.name);
        assert_eq!(dense.coordinates.first(), raw.coordinates.first());
        assert_eq!(dense.coordinates.last(), raw.coordinates.last());
    }
}
