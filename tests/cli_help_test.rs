//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn pocketcare() -> Command {
    let mut cmd = Command::cargo_bin("pocketcare").unwrap();
    cmd.env("POCKETCARE_CONFIG", "/nonexistent/pocketcare/config.toml")
        .env_remove("POCKETCARE_LOG");
    cmd
}

#[test]
fn test_root_help() {
    pocketcare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PocketCare availability slot picker"));
}

#[test]
fn test_pick_help() {
    pocketcare()
        .args(["pick", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interactive dialog"))
        .stdout(predicate::str::contains("--day"));
}

#[test]
fn test_apply_help() {
    pocketcare()
        .args(["apply", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACTIONS:"))
        .stdout(predicate::str::contains("quick=HH:MM-HH:MM"));
}

#[test]
fn test_labels_help() {
    pocketcare()
        .args(["labels", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("half-hour time labels"));
}

#[test]
fn test_presets_help() {
    pocketcare()
        .args(["presets", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quick-add presets"));
}

#[test]
fn test_apply_requires_actions() {
    pocketcare().arg("apply").assert().failure();
}
