use super::*;
use std::path::Path;
use tempfile::tempdir;

fn as_str(path: &Path) -> String {
    path.to_str().expect("utf-8 temp path").to_string()
}

#[test]
fn test_write_creates_missing_parents() {
    let dir = tempdir().unwrap();
    let file = format!("{}/a/b/c/out.txt", as_str(dir.path()));

    write(&file, b"hello", WriteMode::Write, ProbePolicy::Strict).unwrap();

    assert!(dir.path().join("a").is_dir());
    assert!(dir.path().join("a/b").is_dir());
    assert!(dir.path().join("a/b/c").is_dir());
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello");
}

#[test]
fn test_append_mode_accumulates() {
    let dir = tempdir().unwrap();
    let file = format!("{}/logs/run.log", as_str(dir.path()));

    write(&file, b"x", WriteMode::Append, ProbePolicy::Strict).unwrap();
    write(&file, b"y", WriteMode::Append, ProbePolicy::Strict).unwrap();

    assert_eq!(std::fs::read_to_string(&file).unwrap(), "xy");
}

#[test]
fn test_write_mode_truncates() {
    let dir = tempdir().unwrap();
    let file = format!("{}/out/bundle.js", as_str(dir.path()));

    write(&file, b"x", WriteMode::Write, ProbePolicy::Strict).unwrap();
    write(&file, b"y", WriteMode::Write, ProbePolicy::Strict).unwrap();

    assert_eq!(std::fs::read_to_string(&file).unwrap(), "y");
}

#[test]
fn test_write_shorter_content_leaves_no_tail() {
    let dir = tempdir().unwrap();
    let file = format!("{}/notes.txt", as_str(dir.path()));

    write(&file, b"a long first line", WriteMode::Write, ProbePolicy::Strict).unwrap();
    write(&file, b"short", WriteMode::Write, ProbePolicy::Strict).unwrap();

    assert_eq!(std::fs::read_to_string(&file).unwrap(), "short");
}

#[test]
fn test_write_below_regular_file_leaves_disk_unchanged() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("blocker"), "original").unwrap();
    let file = format!("{}/blocker/nested/out.txt", as_str(dir.path()));

    let result = write(&file, b"hello", WriteMode::Write, ProbePolicy::Strict);

    assert!(result.is_err());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("blocker")).unwrap(),
        "original"
    );
}

#[test]
fn test_open_options_per_mode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mode.txt");
    std::fs::write(&path, "abc").unwrap();

    let mut handle = WriteMode::Append.open_options().open(&path).unwrap();
    handle.write_all(b"d").unwrap();
    drop(handle);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "abcd");

    let mut handle = WriteMode::Write.open_options().open(&path).unwrap();
    handle.write_all(b"z").unwrap();
    drop(handle);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "z");
}
