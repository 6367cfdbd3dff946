use super::*;

fn command() -> BuildCommand {
    BuildCommand {
        source: None,
        destination: None,
        extension: None,
        mirror: false,
        depth: None,
        probe: None,
        no_log: false,
    }
}

#[test]
fn test_request_falls_back_to_config() {
    let mut config = AppConfig::default();
    config.paths.source = Some("src".to_string());
    config.project.name = "demo".to_string();

    let request = command().request(&config).unwrap();

    assert_eq!(request.project, "demo");
    assert_eq!(request.source, "src");
    assert_eq!(request.output, "build/bundle.js");
    assert_eq!(request.extension, "js");
    assert_eq!(request.layout, OutputLayout::Bundle);
    assert_eq!(request.log_path.as_deref(), Some("build/logs/build.log"));
}

#[test]
fn test_flags_override_config() {
    let config = AppConfig::default();
    let cmd = BuildCommand {
        source: Some("app".to_string()),
        destination: Some("dist".to_string()),
        extension: Some("acc".to_string()),
        mirror: true,
        depth: Some(1),
        no_log: true,
        ..command()
    };

    let request = cmd.request(&config).unwrap();

    assert_eq!(request.source, "app");
    assert_eq!(request.output, "dist");
    assert_eq!(request.extension, "acc");
    assert_eq!(request.layout, OutputLayout::Mirror);
    assert_eq!(request.depth, Some(1));
    assert!(request.log_path.is_none());
}

#[test]
fn test_missing_source_reports_message() {
    let config = AppConfig::default();

    let err = command().request(&config).unwrap_err();

    assert_eq!(err.to_string(), SOURCE_UNDEFINED);
}
