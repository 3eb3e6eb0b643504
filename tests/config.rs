use zoneglance::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ticker.interval_ms, 1_000);
    assert_eq!(config.refresh.auto_refresh_interval_minutes, 60);
    assert!(!config.storage.in_memory);
    assert!(config.storage.path.is_none());
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Sub-100ms tick period should fail
    config.ticker.interval_ms = 10;
    assert!(config.validate().is_err());

    // Reset and test invalid refresh interval
    config.ticker.interval_ms = 1_000;
    config.refresh.auto_refresh_interval_minutes = 2_000;
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.refresh.auto_refresh_interval_minutes = 60;
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("interval_ms = 1000"));
    assert!(toml_str.contains("auto_refresh_interval_minutes = 60"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ticker]
interval_ms = 250

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Specified values are used
    assert_eq!(config.ticker.interval_ms, 250);
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.refresh.auto_refresh_interval_minutes, 60);
    assert_eq!(config.logging.level, "info");
    assert!(!config.storage.in_memory);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ticker.interval_ms, default_config.ticker.interval_ms);
    assert_eq!(
        config.refresh.auto_refresh_interval_minutes,
        default_config.refresh.auto_refresh_interval_minutes
    );
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("zoneglance_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.exists());
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Zoneglance Configuration File"));
    assert!(content.contains("interval_ms = 1000"));

    let _ = fs::remove_dir_all(&temp_dir);
}
