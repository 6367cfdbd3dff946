use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn cli_scan_lists_nested_files() {
    let dir = tempdir().expect("create tempdir");
    std::fs::create_dir_all(dir.path().join("lib/deep")).unwrap();
    std::fs::write(dir.path().join("lib/a.js"), "").unwrap();
    std::fs::write(dir.path().join("lib/deep/b.js"), "").unwrap();
    std::fs::write(dir.path().join("lib/deep/c.txt"), "").unwrap();

    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.current_dir(dir.path()).args(["scan", "lib", "--extension", "js"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lib/a.js"))
        .stdout(predicate::str::contains("lib/deep/b.js"))
        .stdout(predicate::str::contains("c.txt").not());
}

#[test]
fn cli_scan_missing_directory_fails() {
    let dir = tempdir().expect("create tempdir");

    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.current_dir(dir.path()).args(["scan", "missing"]);
    cmd.assert().failure();
}

#[test]
fn cli_scan_honours_lenient_config() {
    let dir = tempdir().expect("create tempdir");
    std::fs::create_dir_all(dir.path().join("lib")).unwrap();
    std::fs::write(dir.path().join("lib/a.js"), "").unwrap();
    std::fs::write(dir.path().join("access.toml"), "[fs]\nprobe = \"lenient\"\n").unwrap();

    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.current_dir(dir.path()).args(["scan", "lib"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Lenient probing"))
        .stdout(predicate::str::contains("lib/a.js"));
}

#[test]
fn cli_scan_flag_overrides_config() {
    let dir = tempdir().expect("create tempdir");
    std::fs::create_dir_all(dir.path().join("lib")).unwrap();
    std::fs::write(dir.path().join("lib/a.js"), "").unwrap();
    std::fs::write(dir.path().join("access.toml"), "[fs]\nprobe = \"lenient\"\n").unwrap();

    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.current_dir(dir.path()).args(["scan", "lib", "--probe", "strict"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Lenient probing").not());
}
