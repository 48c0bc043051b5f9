//! Binary-level smoke tests for the `tvl` CLI.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn new_then_show_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("char.json");

    Command::cargo_bin("tvl")
        .unwrap()
        .args(["new", "--seed", "42", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    assert!(file.exists());

    Command::cargo_bin("tvl")
        .unwrap()
        .args(["show", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("UPP"));
}

#[test]
fn same_seed_same_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");

    for file in [&a, &b] {
        Command::cargo_bin("tvl")
            .unwrap()
            .args(["new", "--seed", "7", "--file"])
            .arg(file)
            .assert()
            .success();
    }

    let a_json = std::fs::read_to_string(&a).unwrap();
    let b_json = std::fs::read_to_string(&b).unwrap();
    assert_eq!(a_json, b_json);
}

#[test]
fn show_missing_file_fails() {
    Command::cargo_bin("tvl")
        .unwrap()
        .args(["show", "--file", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
