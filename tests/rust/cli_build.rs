use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn seed_project(root: &std::path::Path) {
    std::fs::create_dir_all(root.join("src/views")).unwrap();
    std::fs::write(root.join("src/app.js"), "app").unwrap();
    std::fs::write(root.join("src/views/home.js"), "home").unwrap();
    std::fs::write(root.join("src/views/home.css"), "css").unwrap();
}

#[test]
fn cli_build_writes_bundle_and_log() {
    let dir = tempdir().expect("create tempdir");
    seed_project(dir.path());

    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.current_dir(dir.path()).args(["build", "src"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Compiling: src/app.js"));

    let bundle = std::fs::read_to_string(dir.path().join("build/bundle.js")).unwrap();
    assert_eq!(bundle, "Hey : - )\n".repeat(2));
    assert!(dir.path().join("build/logs/build.log").is_file());
}

#[test]
fn cli_compile_alias_with_mirror_layout() {
    let dir = tempdir().expect("create tempdir");
    seed_project(dir.path());

    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.current_dir(dir.path())
        .args(["compile", "src", "out/nested", "--mirror", "--no-log"]);
    cmd.assert().success();

    assert!(dir.path().join("out/nested/app.js").is_file());
    assert!(dir.path().join("out/nested/views/home.js").is_file());
    assert!(!dir.path().join("out/nested/views/home.css").exists());
    assert!(!dir.path().join("build").exists());
}

#[test]
fn cli_build_reads_project_config() {
    let dir = tempdir().expect("create tempdir");
    seed_project(dir.path());
    std::fs::write(
        dir.path().join("access.toml"),
        concat!(
            "[paths]\nsource = \"src/views\"\noutput = \"dist/styles.css\"\n",
            "\n[build]\nextension = \"css\"\n",
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.current_dir(dir.path()).args(["build", "--no-log"]);
    cmd.assert().success();

    let bundle = std::fs::read_to_string(dir.path().join("dist/styles.css")).unwrap();
    assert_eq!(bundle, "Hey : - )\n");
}

#[test]
fn cli_build_missing_source_fails() {
    let dir = tempdir().expect("create tempdir");

    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.current_dir(dir.path()).args(["build", "nowhere", "--no-log"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Source path not found"));
}

#[test]
fn cli_build_without_source_reports_once() {
    let dir = tempdir().expect("create tempdir");

    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.current_dir(dir.path()).args(["build", "--no-log"]);
    let output = cmd.assert().failure().get_output().clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr
            .matches("Please specify the source file or directory")
            .count(),
        1
    );
}

#[test]
fn cli_build_source_error_is_not_duplicated() {
    let dir = tempdir().expect("create tempdir");

    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.current_dir(dir.path()).args(["build", "nowhere", "--no-log"]);
    let output = cmd.assert().failure().get_output().clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Source path not found").count(), 1);
}

#[test]
fn cli_rejects_unknown_operation() {
    let mut cmd = Command::cargo_bin("access").expect("binary not found");
    cmd.arg("deploy");
    cmd.assert().failure();
}
