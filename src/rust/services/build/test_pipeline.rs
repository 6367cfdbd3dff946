use super::*;
use std::path::Path;
use tempfile::tempdir;

fn as_str(path: &Path) -> String {
    path.to_str().expect("utf-8 temp path").to_string()
}

fn compiler() -> Compiler {
    Compiler::new(Arc::new(Logger::new()), FileSystem::default())
}

fn seed_sources(root: &Path) {
    std::fs::create_dir_all(root.join("src/lib")).unwrap();
    std::fs::write(root.join("src/main.js"), "main").unwrap();
    std::fs::write(root.join("src/lib/util.js"), "util").unwrap();
    std::fs::write(root.join("src/lib/notes.md"), "notes").unwrap();
}

#[test]
fn test_bundle_build_writes_one_line_per_source() {
    let dir = tempdir().unwrap();
    seed_sources(dir.path());
    let root = as_str(dir.path());

    let request = BuildRequest {
        project: "demo".to_string(),
        source: format!("{}/src", root),
        output: format!("{}/build/bundle.js", root),
        extension: "js".to_string(),
        layout: OutputLayout::Bundle,
        depth: None,
        log_path: None,
    };

    let artifacts = compiler().build(&request).unwrap();

    assert_eq!(artifacts.compiled.len(), 2);
    assert_eq!(artifacts.skipped, 1);
    assert_eq!(artifacts.outputs, vec![request.output.clone()]);
    assert_eq!(
        std::fs::read_to_string(&request.output).unwrap(),
        PLACEHOLDER_OUTPUT.repeat(2)
    );
}

#[test]
fn test_rebuilding_bundle_starts_fresh() {
    let dir = tempdir().unwrap();
    seed_sources(dir.path());
    let root = as_str(dir.path());

    let request = BuildRequest {
        project: "demo".to_string(),
        source: format!("{}/src", root),
        output: format!("{}/out/bundle.js", root),
        extension: "js".to_string(),
        layout: OutputLayout::Bundle,
        depth: None,
        log_path: None,
    };

    compiler().build(&request).unwrap();
    compiler().build(&request).unwrap();

    assert_eq!(
        std::fs::read_to_string(&request.output).unwrap(),
        PLACEHOLDER_OUTPUT.repeat(2)
    );
}

#[test]
fn test_mirror_build_keeps_relative_layout() {
    let dir = tempdir().unwrap();
    seed_sources(dir.path());
    let root = as_str(dir.path());

    let request = BuildRequest {
        project: "demo".to_string(),
        source: format!("{}/src", root),
        output: format!("{}/dist", root),
        extension: "js".to_string(),
        layout: OutputLayout::Mirror,
        depth: None,
        log_path: None,
    };

    let artifacts = compiler().build(&request).unwrap();

    assert_eq!(artifacts.outputs.len(), 2);
    assert!(dir.path().join("dist/main.js").is_file());
    assert!(dir.path().join("dist/lib/util.js").is_file());
    assert!(!dir.path().join("dist/lib/notes.md").exists());
}

#[test]
fn test_single_file_source() {
    let dir = tempdir().unwrap();
    seed_sources(dir.path());
    let root = as_str(dir.path());

    let request = BuildRequest {
        project: "demo".to_string(),
        source: format!("{}/src/main.js", root),
        output: format!("{}/bundle.js", root),
        extension: "js".to_string(),
        layout: OutputLayout::Bundle,
        depth: None,
        log_path: None,
    };

    let artifacts = compiler().build(&request).unwrap();

    assert_eq!(artifacts.compiled, vec![request.source.clone()]);
}

#[test]
fn test_build_appends_to_log() {
    let dir = tempdir().unwrap();
    seed_sources(dir.path());
    let root = as_str(dir.path());
    let log_path = format!("{}/build/logs/build.log", root);

    let request = BuildRequest {
        project: "demo".to_string(),
        source: format!("{}/src", root),
        output: format!("{}/build/bundle.js", root),
        extension: "js".to_string(),
        layout: OutputLayout::Bundle,
        depth: None,
        log_path: Some(log_path.clone()),
    };

    compiler().build(&request).unwrap();
    compiler().build(&request).unwrap();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(log.lines().count(), 2);
    assert!(
        log.lines()
            .all(|l| l.contains("demo: built 2 file(s)"))
    );
}

#[test]
fn test_missing_source_fails() {
    let dir = tempdir().unwrap();
    let root = as_str(dir.path());

    let request = BuildRequest {
        project: "demo".to_string(),
        source: format!("{}/nowhere", root),
        output: format!("{}/bundle.js", root),
        extension: "js".to_string(),
        layout: OutputLayout::Bundle,
        depth: None,
        log_path: None,
    };

    let err = compiler().build(&request).unwrap_err();

    assert!(err.to_string().contains("Source path not found"));
    assert!(!dir.path().join("bundle.js").exists());
}
