//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn spicedraw_cli() -> Command {
    Command::cargo_bin("spicedraw-cli").unwrap()
}

/// Path to spicedraw library test fixtures (relative to workspace).
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("spicedraw")
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_cli_help() {
    let mut cmd = spicedraw_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SPICE"));
}

#[test]
fn test_cli_version() {
    let mut cmd = spicedraw_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_no_arguments_shows_usage() {
    let mut cmd = spicedraw_cli();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_render_with_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rc.cir");
    std::fs::copy(fixtures_dir().join("rc_filter.cir"), &input).unwrap();
    let output = dir.path().join("schematic.svg");

    let mut cmd = spicedraw_cli();
    cmd.arg(&input).arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 3 components"))
        .stdout(predicate::str::contains("Found 3 unique nodes"))
        .stdout(predicate::str::contains("Schematic saved to"));

    assert!(output.exists());
}

#[test]
fn test_cli_derives_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rc.cir");
    std::fs::copy(fixtures_dir().join("rc_filter.cir"), &input).unwrap();

    let mut cmd = spicedraw_cli();
    cmd.arg(&input);

    cmd.assert().success();
    assert!(dir.path().join("rc.svg").exists());
}

#[test]
fn test_cli_enforces_svg_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rc.cir");
    std::fs::copy(fixtures_dir().join("rc_filter.cir"), &input).unwrap();

    let mut cmd = spicedraw_cli();
    cmd.arg(&input).arg(dir.path().join("drawing.png"));

    cmd.assert().success();
    assert!(dir.path().join("drawing.png.svg").exists());
}

#[test]
fn test_cli_nonexistent_file() {
    let mut cmd = spicedraw_cli();

    cmd.arg("does_not_exist.cir");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_empty_netlist_exits_one() {
    let mut cmd = spicedraw_cli();
    cmd.arg(fixtures_dir().join("comments_only.cir"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no components found"));
}

#[test]
fn test_cli_per_component_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("amp.cir");
    std::fs::copy(fixtures_dir().join("ce_amplifier.cir"), &input).unwrap();

    let mut cmd = spicedraw_cli();
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[Q] 2N3904"))
        .stdout(predicate::str::contains("Q1:1"));
}
