//! Integration tests for the configuration system

use bookscan_config::{
    Config, ConfigError, ConfigSection, LookupConfig, ScannerConfig, ShareConfig, CONFIG_VERSION,
};
use std::time::Duration;

#[test]
fn test_round_trip_through_toml() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::default();
    config.scanner.status_clear_delay_ms = 1500;
    config.scanner.preferred_device = Some("camera-rear".to_string());
    config.lookup.timeout_secs = 5;

    let text = config.to_toml_string()?;
    let reloaded = Config::from_toml_str(&text)?;

    assert_eq!(reloaded, config);
    assert_eq!(reloaded.version, CONFIG_VERSION);
    Ok(())
}

#[test]
fn test_partial_config_keeps_other_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_toml_str(
        r#"
[scanner]
status_clear_delay_ms = 3000

[share]
title = "My reading list"
"#,
    )?;

    assert_eq!(config.scanner.status_clear_delay(), Duration::from_millis(3000));
    assert_eq!(config.scanner.decode_timeout_ms, 1500);
    assert_eq!(config.share.title, "My reading list");
    assert_eq!(config.share.app_url, ShareConfig::default().app_url);
    assert_eq!(config.lookup, LookupConfig::default());
    Ok(())
}

#[test]
fn test_validation_reports_every_section() {
    let mut config = Config::default();
    config.scanner.status_clear_delay_ms = 1;
    config.lookup.base_url = "not a url".to_string();
    config.share.title = "   ".to_string();

    let errors = config.validate().unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

    assert!(fields.contains(&"scanner.status_clear_delay_ms"));
    assert!(fields.contains(&"lookup.base_url"));
    assert!(fields.contains(&"share.title"));
}

#[test]
fn test_parse_error_is_reported() {
    let result = Config::from_toml_str("scanner = 12");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_section_names() {
    assert_eq!(ScannerConfig::default().section_name(), "scanner");
    assert_eq!(LookupConfig::default().section_name(), "lookup");
    assert_eq!(ShareConfig::default().section_name(), "share");
}

#[test]
fn test_unusable_config_falls_back_with_warning() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = Config::from_toml_str_or_default("[scanner]\nlookup_deadline_ms = 5\n");
    assert_eq!(config, Config::default());

    let config = Config::from_toml_str_or_default("[scanner]\nlookup_deadline_ms = 20000\n");
    assert_eq!(config.scanner.lookup_deadline(), Duration::from_secs(20));
}
