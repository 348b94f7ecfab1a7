// Config loading and validation tests

use fleet_report::config::{AppConfig, ColorChoice};

const VALID_CONFIG: &str = r#"
[output]
color = "never"

[logging]
level = "debug"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.output.color, ColorChoice::Never);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_defaults_when_empty() {
    let config = AppConfig::load_from_str("").expect("empty config");
    assert_eq!(config.output.color, ColorChoice::Auto);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_config_partial_sections_use_defaults() {
    let config = AppConfig::load_from_str("[output]\ncolor = \"always\"\n").expect("partial");
    assert_eq!(config.output.color, ColorChoice::Always);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_config_validation_rejects_unknown_log_level() {
    let bad = VALID_CONFIG.replace("level = \"debug\"", "level = \"loud\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("logging.level"));
}

#[test]
fn test_config_rejects_unknown_color_choice() {
    let bad = VALID_CONFIG.replace("color = \"never\"", "color = \"sometimes\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_color_choice_resolution() {
    assert!(ColorChoice::Always.resolve(true, false));
    assert!(!ColorChoice::Never.resolve(false, true));
    assert!(ColorChoice::Auto.resolve(false, true));
    assert!(!ColorChoice::Auto.resolve(true, true));
    assert!(!ColorChoice::Auto.resolve(false, false));
}

#[test]
fn test_config_load_from_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("fleet-report.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    let config = AppConfig::load_from_path(path.to_str().unwrap()).expect("load from path");
    assert_eq!(config.output.color, ColorChoice::Never);
}

#[test]
fn test_config_load_from_missing_path_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = AppConfig::load_from_path(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.logging.level, "debug");
}
