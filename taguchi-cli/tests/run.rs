#![allow(missing_docs)]

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

#[test]
fn reports_each_runs_exit_code() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("def.tgu");
    file.write_str("factors:\n  a: 1, 2\narray: L4\n").unwrap();

    Command::cargo_bin("taguchi")
        .unwrap()
        .args([
            "run",
            file.path().to_str().unwrap(),
            "test \"$TAGUCHI_RUN_ID\" -ge 1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("run 1: 0"))
        .stdout(predicate::str::contains("run 4: 0"));
}

#[test]
fn a_failing_command_makes_the_subcommand_fail() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("def.tgu");
    file.write_str("factors:\n  a: 1, 2\narray: L4\n").unwrap();

    Command::cargo_bin("taguchi")
        .unwrap()
        .args(["run", file.path().to_str().unwrap(), "exit 3"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("run 1: 3"));
}
