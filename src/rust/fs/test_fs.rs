use super::*;
use tempfile::tempdir;

#[test]
fn test_write_then_scan_round_trip() {
    let dir = tempdir().unwrap();
    let root = dir.path().to_str().unwrap().to_string();
    let fs = FileSystem::default();

    fs.write_file(&format!("{}/out/app/main.js", root), "one").unwrap();
    fs.append(&format!("{}/out/app/main.js", root), "two").unwrap();
    fs.write_file(&format!("{}/out/readme.md", root), "doc").unwrap();

    let mut files = fs.scan(&format!("{}/out", root)).unwrap();
    files.sort();

    assert_eq!(
        files,
        vec![
            format!("{}/out/app/main.js", root),
            format!("{}/out/readme.md", root),
        ]
    );
    assert!(fs.is_directory(&format!("{}/out/app", root)).unwrap());
    assert_eq!(
        std::fs::read_to_string(format!("{}/out/app/main.js", root)).unwrap(),
        "onetwo"
    );
}

#[test]
fn test_mirror_paths_with_lower_path() {
    let dir = tempdir().unwrap();
    let root = dir.path().to_str().unwrap().to_string();
    let fs = FileSystem::new(ProbePolicy::Strict);
    let source = format!("{}/src", root);

    fs.write_file(&format!("{}/nested/file.js", source), "x").unwrap();

    let depth = source.split('/').count();
    for file in fs.scan(&source).unwrap() {
        let target = format!("{}/dist/{}", root, lower_path(&file, depth));
        fs.write_file(&target, "compiled").unwrap();
    }

    assert!(fs.exists(&format!("{}/dist/nested/file.js", root)).unwrap());
}

#[test]
fn test_default_policy_is_strict() {
    assert_eq!(FileSystem::default().policy(), ProbePolicy::Strict);
}
