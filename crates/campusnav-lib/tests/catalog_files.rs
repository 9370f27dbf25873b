use std::fs;

use campusnav_lib::{
    Coordinate, Error, LocationCatalog, LocationCategory, Router, RoutingConfig, SegmentCatalog,
};
use tempfile::tempdir;

#[test]
fn segment_catalog_loads_from_json_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("segments.json");
    fs::write(
        &path,
        r#"{"segments":[
            {"name":"Quad","coordinates":[[0.0,0.0],[0.0,0.0002]]},
            {"name":"Spur","coordinates":[[0.0,0.0002],[0.0002,0.0002]]}
        ]}"#,
    )
    .expect("write fixture");

    let catalog = SegmentCatalog::from_path(&path).expect("catalog loads");
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get("Spur").map(|s| s.coordinates[1]),
        Some(Coordinate::new(0.0002, 0.0002))
    );

    let router = Router::build(&catalog, RoutingConfig::default()).expect("router builds");
    assert_eq!(router.graph().stats().components, 1);
}

#[test]
fn malformed_segment_file_reports_path() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"segments\": [").expect("write fixture");

    let err = SegmentCatalog::from_path(&path).expect_err("malformed json");
    assert!(matches!(err, Error::CatalogLoad { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("create temp dir");
    let err = LocationCatalog::from_path(&dir.path().join("absent.json")).expect_err("missing");
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn location_catalog_loads_from_json_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("locations.json");
    fs::write(
        &path,
        r#"{"locations":[
            {"name":"North Gate","position":[0.0,0.0],"category":"entrance"},
            {"name":"Pool","position":[0.0,0.0002],"category":"sports"}
        ]}"#,
    )
    .expect("write fixture");

    let catalog = LocationCatalog::from_path(&path).expect("catalog loads");
    let sports = catalog.filter(Some(LocationCategory::Sports));
    assert_eq!(sports.len(), 1);
    assert_eq!(sports[0].name, "Pool");
}
