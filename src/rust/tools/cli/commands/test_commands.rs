use super::*;

#[test]
fn test_policy_comes_from_config() {
    let mut config = AppConfig::default();
    config.fs.probe = ProbePolicy::Lenient;

    assert_eq!(
        probe_policy(None, &config, &Logger::new()),
        ProbePolicy::Lenient
    );
}

#[test]
fn test_policy_flag_overrides_config() {
    let mut config = AppConfig::default();
    config.fs.probe = ProbePolicy::Lenient;

    assert_eq!(
        probe_policy(Some(ProbePolicy::Strict), &config, &Logger::new()),
        ProbePolicy::Strict
    );
}

#[test]
fn test_policy_defaults_to_strict() {
    assert_eq!(
        probe_policy(None, &AppConfig::default(), &Logger::new()),
        ProbePolicy::Strict
    );
}
