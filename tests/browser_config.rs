use spawndeck::BrowserConfig;
use std::fs;

#[test]
fn defaults_match_the_tool_layout() {
    let config = BrowserConfig::default();
    assert_eq!(config.max_icon_size, 32.0);
    assert_eq!(config.button_size, 40.0);
    assert_eq!(config.button_padding, 4.0);
    assert_eq!(config.default_position, [0.5, 0.4]);
}

#[test]
fn partial_files_only_override_named_fields() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("browser.json");
    fs::write(&path, r#"{ "max_icon_size": 48.0, "button_size": 56.0 }"#).expect("write config");

    let config = BrowserConfig::load(&path).expect("config parses");
    assert_eq!(config.max_icon_size, 48.0);
    assert_eq!(config.button_size, 56.0);
    assert_eq!(config.button_padding, 4.0, "unnamed fields keep defaults");
    assert_eq!(config.default_position, [0.5, 0.4]);
}

#[test]
fn invalid_files_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("browser.json");
    fs::write(&path, "{ not json").expect("write config");

    assert!(BrowserConfig::load(&path).is_err());
    let config = BrowserConfig::load_or_default(&path);
    assert_eq!(config.max_icon_size, 32.0);
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = BrowserConfig::load_or_default(dir.path().join("nope.json"));
    assert_eq!(config.button_size, 40.0);
}
