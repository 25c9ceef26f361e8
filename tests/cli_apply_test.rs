//! pocketcare apply / labels / presets integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn pocketcare() -> Command {
    let mut cmd = Command::cargo_bin("pocketcare").unwrap();
    cmd.env("POCKETCARE_CONFIG", "/nonexistent/pocketcare/config.toml")
        .env_remove("POCKETCARE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn apply_commits_remaining_selection_as_json() {
    pocketcare()
        .args([
            "apply",
            "--day",
            "Monday",
            "--json",
            "add=09:00-10:00",
            "quick=14:00-17:00",
            "remove=09:00-10:00",
            "commit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"day\": \"Monday\""))
        .stdout(predicate::str::contains("\"saved\": true"))
        .stdout(predicate::str::contains("\"14:00-17:00\""))
        .stdout(predicate::str::contains("09:00-10:00").not());
}

#[test]
fn apply_prints_table_for_saved_slots() {
    pocketcare()
        .args([
            "apply",
            "--day",
            "Tuesday",
            "start=08:00",
            "end=09:30",
            "add",
            "commit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("08:00-09:30"))
        .stdout(predicate::str::contains("1h 30m"))
        .stdout(predicate::str::contains("slot(s) saved for Tuesday"));
}

#[test]
fn piped_summary_has_no_color_codes() {
    pocketcare()
        .args(["apply", "--day", "Tuesday", "quick=09:00-12:00", "commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ 1 slot(s) saved for Tuesday"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn apply_without_commit_cancels() {
    pocketcare()
        .args(["apply", "--day", "Friday", "--json", "quick=09:00-12:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"saved\": false"))
        .stdout(predicate::str::contains("09:00-12:00").not());
}

#[test]
fn apply_cancel_prints_cancelled() {
    pocketcare()
        .args(["apply", "--day", "Friday", "add", "cancel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));
}

#[test]
fn apply_rejects_unknown_preset() {
    pocketcare()
        .args(["apply", "--day", "Monday", "quick=09:00-10:30", "commit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[VAL003]"));
}

#[test]
fn apply_rejects_actions_after_commit() {
    pocketcare()
        .args(["apply", "--day", "Monday", "commit", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[SEL001]"));
}

#[test]
fn labels_json_lists_all_labels() {
    pocketcare()
        .args(["labels", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"00:00\""))
        .stdout(predicate::str::contains("\"23:30\""));
}

#[test]
fn presets_table_lists_durations() {
    pocketcare()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("14:00-17:00"))
        .stdout(predicate::str::contains("3h"));
}

#[test]
fn invalid_config_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "output = \"yaml\"\n").unwrap();

    Command::cargo_bin("pocketcare")
        .unwrap()
        .env("POCKETCARE_CONFIG", &path)
        .arg("labels")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[CFG001]"));
}
