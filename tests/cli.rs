use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("gather").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("tickets"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("gather").unwrap();
    cmd.arg("frobnicate").assert().failure();
}

#[test]
fn status_reports_missing_setup() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("gather").unwrap();
    cmd.env("HOME", home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("User:      (not set)"))
        .stdout(predicate::str::contains("Run `gather init`"));
}

#[test]
fn events_requires_a_subcommand() {
    let mut cmd = Command::cargo_bin("gather").unwrap();
    cmd.arg("events").assert().failure();
}
