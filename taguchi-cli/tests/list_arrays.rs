#![allow(missing_docs)]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn lists_every_catalog_array() {
    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["list-arrays"])
        .assert()
        .success()
        .stdout(predicate::str::contains("L9"))
        .stdout(predicate::str::contains("L27"))
        .stdout(predicate::str::contains("L81"));
}

#[test]
fn json_output_includes_shape_fields() {
    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["--json", "list-arrays"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"L9\""))
        .stdout(predicate::str::contains("\"rows\""))
        .stdout(predicate::str::contains("\"base\""));
}
