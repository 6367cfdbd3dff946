use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_prints_help() {
    // Run the binary with --help
    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("access"));
}
