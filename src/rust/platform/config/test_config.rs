use super::*;
use tempfile::tempdir;

#[test]
fn test_defaults_without_config_file() {
    let dir = tempdir().unwrap();

    let config = AppConfig::load(dir.path().to_str().unwrap()).unwrap();

    assert_eq!(config.paths.source, None);
    assert_eq!(config.paths.output, "build/bundle.js");
    assert_eq!(config.build.extension, "js");
    assert_eq!(config.build.layout, OutputLayout::Bundle);
    assert_eq!(config.fs.probe, ProbePolicy::Strict);
    assert_eq!(config.build_log_path(), "build/logs/build.log");
    // Loading never writes a default file.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_load_toml_sections() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(TOML_CONFIG),
        r#"
[paths]
source = "lib"
output = "dist"

[build]
extension = "acc"
layout = "mirror"
depth = 1

[fs]
probe = "lenient"
"#,
    )
    .unwrap();

    let config = AppConfig::load(dir.path().to_str().unwrap()).unwrap();

    assert_eq!(config.paths.source.as_deref(), Some("lib"));
    assert_eq!(config.paths.output, "dist");
    assert_eq!(config.paths.logs, "build/logs");
    assert_eq!(config.build.extension, "acc");
    assert_eq!(config.build.layout, OutputLayout::Mirror);
    assert_eq!(config.build.depth, Some(1));
    assert_eq!(config.fs.probe, ProbePolicy::Lenient);
    assert_eq!(config.project.name, "Access Project");
}

#[test]
fn test_load_json_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(JSON_CONFIG),
        r#"{ "project": { "name": "demo" }, "build": { "extension": "ts" } }"#,
    )
    .unwrap();

    let config = AppConfig::load(dir.path().to_str().unwrap()).unwrap();

    assert_eq!(config.project.name, "demo");
    assert_eq!(config.build.extension, "ts");
    assert_eq!(config.build.layout, OutputLayout::Bundle);
}

#[test]
fn test_toml_wins_over_json() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(TOML_CONFIG), "[project]\nname = \"from toml\"\n").unwrap();
    std::fs::write(dir.path().join(JSON_CONFIG), r#"{ "project": { "name": "from json" } }"#)
        .unwrap();

    let config = AppConfig::load(dir.path().to_str().unwrap()).unwrap();

    assert_eq!(config.project.name, "from toml");
}

#[test]
fn test_invalid_config_reports_path() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(TOML_CONFIG), "[build\n").unwrap();

    let err = AppConfig::load(dir.path().to_str().unwrap()).unwrap_err();

    assert!(format!("{:#}", err).contains("invalid TOML config"));
}
