use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

/// Environment variables the CLI reads; cleared so a developer's shell cannot
/// change test outcomes.
const CAMPUSNAV_ENV: [&str; 6] = [
    "CAMPUSNAV_SEGMENTS_PATH",
    "CAMPUSNAV_LOCATIONS_PATH",
    "CAMPUSNAV_ALGORITHM",
    "CAMPUSNAV_SPACING_M",
    "CAMPUSNAV_QUANTIZE",
    "CAMPUSNAV_PROXIMITY_DEG",
];

pub fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("campusnav-cli");
    cmd.env("RUST_LOG", "error");
    for key in CAMPUSNAV_ENV {
        cmd.env_remove(key);
    }
    cmd
}
