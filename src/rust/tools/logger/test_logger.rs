use super::*;

#[test]
fn test_default_logger_is_quiet() {
    assert!(!Logger::new().verbose);
    assert!(Logger::verbose().verbose);
}

#[test]
fn test_level_labels() {
    assert_eq!(LogLevel::Warning.as_label(), "WARN");
    assert_eq!(LogLevel::Action.as_label(), "ACTION");
}

#[test]
fn test_colored_line_carries_signature_and_label() {
    let line = Logger::new().render_colored_line(LogLevel::Info, "Compiling: src/main.js");

    assert!(line.contains("Access"));
    assert!(line.contains("[INFO]"));
    assert!(line.ends_with("Compiling: src/main.js"));
}
