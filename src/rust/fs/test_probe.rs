use super::*;
use tempfile::tempdir;

fn as_str(path: &std::path::Path) -> String {
    path.to_str().expect("utf-8 temp path").to_string()
}

#[test]
fn test_exists_reports_missing_as_false() {
    let dir = tempdir().unwrap();
    let missing = as_str(&dir.path().join("nope.txt"));

    assert!(!exists(&missing, ProbePolicy::Strict).unwrap());
    assert!(!exists(&missing, ProbePolicy::Lenient).unwrap());
}

#[test]
fn test_exists_and_is_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("main.js");
    std::fs::write(&file, "x").unwrap();

    let root = as_str(dir.path());
    let file = as_str(&file);

    assert!(exists(&root, ProbePolicy::Strict).unwrap());
    assert!(exists(&file, ProbePolicy::Strict).unwrap());
    assert!(is_directory(&root, ProbePolicy::Strict).unwrap());
    assert!(!is_directory(&file, ProbePolicy::Strict).unwrap());
}

#[test]
fn test_is_directory_missing_path() {
    let dir = tempdir().unwrap();
    let missing = as_str(&dir.path().join("gone"));

    assert!(!is_directory(&missing, ProbePolicy::Strict).unwrap());
}

#[test]
fn test_strict_probe_surfaces_non_not_found_failures() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    std::fs::write(&file, "x").unwrap();

    // Stat through a regular file fails with "not a directory", not "not found".
    let beneath = format!("{}/child", as_str(&file));

    let err = exists(&beneath, ProbePolicy::Strict).unwrap_err();
    assert!(matches!(err, FsError::Io { ref path, .. } if path == &beneath));
}

#[test]
fn test_lenient_probe_coerces_failures_to_true() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    std::fs::write(&file, "x").unwrap();

    let beneath = format!("{}/child", as_str(&file));

    // Legacy behaviour: an inaccessible path is reported as existing.
    assert!(exists(&beneath, ProbePolicy::Lenient).unwrap());
    assert!(is_directory(&beneath, ProbePolicy::Lenient).is_err());
}

#[test]
fn test_policy_parses_from_str() {
    assert_eq!("strict".parse::<ProbePolicy>(), Ok(ProbePolicy::Strict));
    assert_eq!("Lenient".parse::<ProbePolicy>(), Ok(ProbePolicy::Lenient));
    assert!("loose".parse::<ProbePolicy>().unwrap_err().contains("loose"));
    assert_eq!(ProbePolicy::default(), ProbePolicy::Strict);
}
