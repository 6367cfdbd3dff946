use super::*;
use std::path::Path;
use tempfile::tempdir;

fn as_str(path: &Path) -> String {
    path.to_str().expect("utf-8 temp path").to_string()
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();

    let files = scan(&as_str(dir.path()), ProbePolicy::Strict).unwrap();

    assert!(files.is_empty());
}

#[test]
fn test_scan_flattens_subdirectories() {
    let dir = tempdir().unwrap();
    let root = as_str(dir.path());
    std::fs::write(dir.path().join("top.js"), "").unwrap();
    std::fs::create_dir(dir.path().join("lib")).unwrap();
    std::fs::write(dir.path().join("lib/inner.js"), "").unwrap();

    let mut files = scan(&root, ProbePolicy::Strict).unwrap();
    files.sort();

    assert_eq!(
        files,
        vec![format!("{}/lib/inner.js", root), format!("{}/top.js", root)]
    );
}

#[test]
fn test_scan_excludes_empty_directories() {
    let dir = tempdir().unwrap();
    let root = as_str(dir.path());
    std::fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
    std::fs::write(dir.path().join("a/b/c/deep.txt"), "").unwrap();
    std::fs::create_dir(dir.path().join("empty")).unwrap();

    let files = scan(&root, ProbePolicy::Strict).unwrap();

    assert_eq!(files, vec![format!("{}/a/b/c/deep.txt", root)]);
}

#[test]
fn test_scan_keeps_subtree_contiguous() {
    let dir = tempdir().unwrap();
    let root = as_str(dir.path());
    for sub in ["one", "two"] {
        std::fs::create_dir(dir.path().join(sub)).unwrap();
        for leaf in ["x.js", "y.js", "z.js"] {
            std::fs::write(dir.path().join(sub).join(leaf), "").unwrap();
        }
    }

    let files = scan(&root, ProbePolicy::Strict).unwrap();

    assert_eq!(files.len(), 6);
    // Each subdirectory's files appear as one run, depth first.
    let owners: Vec<&str> = files
        .iter()
        .map(|f| if f.contains("/one/") { "one" } else { "two" })
        .collect();
    let switches = owners.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(switches, 1);
}

#[test]
fn test_scan_nested_root() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("src/main.js"), "").unwrap();

    let files = scan(&format!("{}/src", as_str(dir.path())), ProbePolicy::Strict).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("/src/main.js"));
}

#[test]
fn test_scan_missing_root_fails() {
    let dir = tempdir().unwrap();
    let missing = format!("{}/missing", as_str(dir.path()));

    let err = scan(&missing, ProbePolicy::Strict).unwrap_err();

    assert!(matches!(err, FsError::Io { ref path, .. } if path == &missing));
}

#[test]
fn test_scan_file_root_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("single.js");
    std::fs::write(&file, "").unwrap();

    assert!(scan(&as_str(&file), ProbePolicy::Strict).is_err());
}
