mod common;

use predicates::prelude::*;

use common::cli;

#[test]
fn help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("locations"))
        .stdout(predicate::str::contains("graph"));
}

#[test]
fn locations_lists_every_category_by_default() {
    cli()
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrances:"))
        .stdout(predicate::str::contains("Food & Dining:"))
        .stdout(predicate::str::contains("  - Boys Hostel"));
}

#[test]
fn locations_can_be_filtered() {
    cli()
        .args(["locations", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q Cafe"))
        .stdout(predicate::str::contains("Main Entrance").not());
}

#[test]
fn unknown_category_is_rejected_by_parser() {
    cli()
        .args(["locations", "--category", "gym"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'gym'"));
}

#[test]
fn graph_reports_single_component_campus() {
    cli()
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("Segments:   30"))
        .stdout(predicate::str::contains("Components: 1"));
}
