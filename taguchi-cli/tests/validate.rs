#![allow(missing_docs)]

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn write_definition(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let file = dir.child(name);
    file.write_str(contents).unwrap();
    file.path().to_path_buf()
}

#[test]
fn accepts_a_well_formed_definition() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(
        &dir,
        "def.tgu",
        "factors:\n  speed: low, medium, high\n  feed: slow, fast\narray: L9\n",
    );

    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 factor(s)"))
        .stdout(predicate::str::contains("array L9"));
}

#[test]
fn rejects_an_empty_factor_set() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(&dir, "def.tgu", "array: L9\n");

    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn rejects_a_malformed_array_name() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(&dir, "def.tgu", "factors:\n  a: 1, 2\narray: nine\n");

    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn json_output_reports_factor_count_and_array() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(&dir, "def.tgu", "factors:\n  a: 1, 2\narray: L4\n");

    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["--json", "validate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::eq(
            "{\"valid\":true,\"factors\":1,\"array\":\"L4\"}\n",
        ));
}
