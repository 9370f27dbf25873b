mod common;

use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use common::cli;

#[test]
fn route_between_named_locations() {
    cli()
        .args(["route", "--from", "Main Entrance", "--to", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from Main Entrance to Library (walking network; algorithm: dijkstra):",
        ))
        .stdout(predicate::str::contains("Distance:"));
}

#[test]
fn names_are_case_insensitive() {
    cli()
        .args(["route", "--from", "main entrance", "--to", "q cafe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to Q Cafe"));
}

#[test]
fn a_star_algorithm_is_supported() {
    cli()
        .args([
            "route",
            "--from",
            "Easwari Entrance",
            "--to",
            "Q Mart",
            "--algorithm",
            "a-star",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: a-star"));
}

#[test]
fn json_route_starts_and_ends_at_endpoints() {
    let output = cli()
        .args([
            "--format",
            "json",
            "route",
            "--from",
            "13.031966,80.181146",
            "--to",
            "Boys Hostel",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let points = value["points"].as_array().expect("points array");
    assert_eq!(points.first(), Some(&serde_json::json!([13.031966, 80.181146])));
    assert_eq!(points.last(), Some(&serde_json::json!([13.03376, 80.18109])));
    assert_eq!(value["origin"]["label"], "13.031966,80.181146");
    assert_eq!(value["destination"]["label"], "Boys Hostel");
}

#[test]
fn geojson_route_is_a_line_string() {
    cli()
        .args([
            "--format", "geojson", "route", "--from", "BMS Block", "--to", "Admin Block",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"LineString\""));
}

#[test]
fn unknown_location_error_is_friendly() {
    cli()
        .args(["route", "--from", "Libary", "--to", "Q Mart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown location name: Libary"))
        .stderr(predicate::str::contains("Did you mean 'Library'?"));
}

#[test]
fn invalid_spacing_is_rejected() {
    cli()
        .args([
            "route", "--from", "Library", "--to", "Q Mart", "--spacing", "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "point spacing must be a positive number of metres no smaller than 0.01",
        ));
}

#[test]
fn spacing_too_fine_to_allocate_is_rejected() {
    cli()
        .args([
            "route", "--from", "Library", "--to", "Q Mart", "--spacing", "1e-9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("point spacing must be"));
}

#[test]
fn quantize_beyond_f64_precision_is_rejected() {
    cli()
        .args(["--quantize", "400", "graph"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid configuration value for quantize: 400",
        ));
}

#[test]
fn disconnected_catalog_falls_back_to_direct_line() {
    let dir = tempdir().expect("create temp dir");
    let segments = dir.path().join("segments.json");
    fs::write(
        &segments,
        r#"{"segments":[
            {"name":"West","coordinates":[[0.0,0.0],[0.0,0.0001]]},
            {"name":"East","coordinates":[[1.0,1.0],[1.0,1.0001]]}
        ]}"#,
    )
    .expect("write segments");

    cli()
        .arg("--segments")
        .arg(&segments)
        .args(["route", "--from=-0.001,0.0", "--to", "1.001,1.0", "--points"])
        .assert()
        .success()
        .stdout(predicate::str::contains("direct line"))
        .stdout(predicate::str::contains("Points:    2"));
}

#[test]
fn segments_path_can_come_from_environment() {
    let dir = tempdir().expect("create temp dir");
    let segments = dir.path().join("segments.json");
    fs::write(
        &segments,
        r#"{"segments":[{"name":"Only","coordinates":[[0.0,0.0],[0.0,0.001]]}]}"#,
    )
    .expect("write segments");

    cli()
        .env("CAMPUSNAV_SEGMENTS_PATH", &segments)
        .args(["--format", "json", "graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"segments\": 1"))
        .stdout(predicate::str::contains("\"components\": 1"));
}
