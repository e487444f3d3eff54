use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

fn write_session(dir: &std::path::Path) {
    let user = json!({ "id": 1, "username": "alice" }).to_string();
    let contents = json!({ "token": "tok-alice", "user": user });
    fs::write(dir.join("session.json"), contents.to_string()).unwrap();
}

#[test]
fn test_whoami_without_session() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("remind")
        .env("REMIND_HOME", dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_whoami_reads_stored_session() {
    let dir = tempdir().unwrap();
    write_session(dir.path());

    cargo_bin_cmd!("remind")
        .env("REMIND_HOME", dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));
}

#[test]
fn test_logout_clears_stored_session() {
    let dir = tempdir().unwrap();
    write_session(dir.path());

    cargo_bin_cmd!("remind")
        .env("REMIND_HOME", dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out alice"));

    let contents = fs::read_to_string(dir.path().join("session.json")).unwrap();
    assert!(!contents.contains("tok-alice"));

    cargo_bin_cmd!("remind")
        .env("REMIND_HOME", dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}
