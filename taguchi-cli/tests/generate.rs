#![allow(missing_docs)]

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

#[test]
fn prints_one_row_per_run_with_auto_selected_array() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("def.tgu");
    file.write_str("factors:\n  a: 1, 2, 3\n  b: 1, 2, 3\n  c: 1, 2, 3\n  d: 1, 2, 3\n")
        .unwrap();

    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["generate", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("a"))
        .stdout(predicate::str::contains("d"));
}

#[test]
fn honors_an_explicit_array_override() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("def.tgu");
    file.write_str("factors:\n  a: 1, 2\narray: L8\n").unwrap();

    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["generate", file.path().to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn reports_column_overflow_for_an_array_too_small_for_the_factors() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("def.tgu");
    file.write_str("factors:\n  a: 1, 2, 3, 4, 5, 6, 7, 8, 9\n  b: 1, 2, 3, 4, 5, 6, 7, 8, 9\narray: L9\n")
        .unwrap();

    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["generate", file.path().to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn json_output_is_an_array_of_run_objects() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("def.tgu");
    file.write_str("factors:\n  a: 1, 2\narray: L4\n").unwrap();

    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["--json", "generate", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"run_id\": 1"))
        .stdout(predicate::str::contains("\"a\":"));
}
