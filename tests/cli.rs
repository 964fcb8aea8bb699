use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("ghv").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ghv"));
}

#[test]
fn render_writes_svg_json_and_prints_stats() {
    let dir = tempdir().unwrap();
    let svg = dir.path().join("out.svg");
    let json = dir.path().join("out.json");

    let mut cmd = Command::cargo_bin("ghv").unwrap();
    cmd.args([
        "render",
        "--data",
        "data/vegetables_greenhouse.csv",
        "--aux",
        "data/temps.csv",
        "--select",
        "Cucumber",
        "--compare-aux",
        "--stats",
    ]);
    cmd.arg("--out").arg(&svg);
    cmd.arg("--json").arg(&json);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cucumber"));

    assert!(svg.metadata().unwrap().len() > 0);
    let text = std::fs::read_to_string(&json).unwrap();
    assert!(text.contains("\"selected\": \"Cucumber\""));
}

#[test]
fn render_accepts_a_dimension() {
    let dir = tempdir().unwrap();
    let svg = dir.path().join("area.svg");
    let mut cmd = Command::cargo_bin("ghv").unwrap();
    cmd.args([
        "render",
        "--data",
        "data/vegetables_greenhouse.csv",
        "--aux",
        "data/temps.csv",
        "--dimension",
        "area",
    ]);
    cmd.arg("--out").arg(&svg);
    cmd.assert().success();
    assert!(svg.exists());
}

#[test]
fn selecting_an_unknown_series_fails() {
    let mut cmd = Command::cargo_bin("ghv").unwrap();
    cmd.args([
        "render",
        "--data",
        "data/vegetables_greenhouse.csv",
        "--aux",
        "data/temps.csv",
        "--select",
        "Pumpkin",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown series"));
}
