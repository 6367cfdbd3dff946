use super::*;
use std::path::Path;
use tempfile::tempdir;

fn as_str(path: &Path) -> String {
    path.to_str().expect("utf-8 temp path").to_string()
}

#[test]
fn test_materialize_creates_every_segment() {
    let dir = tempdir().unwrap();
    let target = format!("{}/a/b/c", as_str(dir.path()));

    materialize(&target, ProbePolicy::Strict).unwrap();

    assert!(dir.path().join("a").is_dir());
    assert!(dir.path().join("a/b").is_dir());
    assert!(dir.path().join("a/b/c").is_dir());
}

#[test]
fn test_materialize_existing_path_is_noop() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
    std::fs::write(dir.path().join("a/b/keep.txt"), "kept").unwrap();
    let target = format!("{}/a/b", as_str(dir.path()));

    materialize(&target, ProbePolicy::Strict).unwrap();
    materialize(&target, ProbePolicy::Strict).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path().join("a/b")).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("a/b/keep.txt")).unwrap(),
        "kept"
    );
}

#[test]
fn test_materialize_empty_path_succeeds() {
    assert!(materialize("", ProbePolicy::Strict).is_ok());
}

#[test]
fn test_materialize_tolerates_doubled_separators() {
    let dir = tempdir().unwrap();
    let target = format!("{}/x//y", as_str(dir.path()));

    materialize(&target, ProbePolicy::Strict).unwrap();

    assert!(dir.path().join("x/y").is_dir());
}

#[test]
fn test_materialize_below_regular_file_fails() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("blocker"), "x").unwrap();
    let target = format!("{}/blocker/sub", as_str(dir.path()));

    let err = materialize(&target, ProbePolicy::Strict).unwrap_err();

    assert!(matches!(err, FsError::Io { .. }));
    assert!(dir.path().join("blocker").is_file());
}

#[test]
fn test_create_single_treats_existing_directory_as_success() {
    let dir = tempdir().unwrap();
    let target = as_str(&dir.path().join("race"));
    std::fs::create_dir(&target).unwrap();

    assert!(create_single(&target).is_ok());
}
