//! Unit tests for config.rs module

use std::io::Write;
use std::path::PathBuf;

use msg_code_rust::config::{default_store_path, AppConfig, DEFAULT_STORE_RELATIVE_PATH};

#[test]
fn test_default_config_validates() {
    assert!(AppConfig::default().validate().is_ok());
}

#[test]
fn test_default_output_settings() {
    let config = AppConfig::default();
    assert_eq!(config.output.format, "txt");
    assert_eq!(config.output.self_label, "Me");
    assert!(!config.output.human_readable);
}

#[test]
fn test_config_validation_invalid_log_level() {
    let mut config = AppConfig::default();
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_valid_log_levels() {
    for level in ["trace", "debug", "info", "warn", "error"] {
        let mut config = AppConfig::default();
        config.logging.level = level.to_string();
        assert!(config.validate().is_ok(), "Failed for level: {level}");
    }
}

#[test]
fn test_config_validation_invalid_log_format() {
    let mut config = AppConfig::default();
    config.logging.format = "xml".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_invalid_output_format() {
    let mut config = AppConfig::default();
    config.output.format = "pdf".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_digit_window() {
    let mut config = AppConfig::default();
    config.code.min_digits = 7;
    config.code.max_digits = 6;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_empty_clipboard_command() {
    let mut config = AppConfig::default();
    config.clipboard.command = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_self_label_with_newline() {
    let mut config = AppConfig::default();
    config.output.self_label = "Me\nYou".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_resolve_default_store_path() {
    let config = AppConfig::default();
    if let Some(expected) = default_store_path() {
        let resolved = config.resolve_store_path().expect("Failed to resolve store path");
        assert_eq!(resolved, expected);
        assert!(resolved.ends_with(DEFAULT_STORE_RELATIVE_PATH));
    }
}

#[test]
fn test_resolve_configured_store_path() {
    let mut config = AppConfig::default();
    config.store.path = "/srv/backup/chat.db".to_string();
    assert_eq!(
        config.resolve_store_path().expect("Failed to resolve store path"),
        PathBuf::from("/srv/backup/chat.db")
    );
}

#[test]
fn test_load_from_explicit_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create config file");
    writeln!(
        file,
        "[store]\npath = \"/tmp/other.db\"\nlimit = 25\n\n[output]\nself_label = \"Jess\"\nformat = \"json\"\n\n[clipboard]\ncommand = \"xclip\"\nargs = [\"-selection\", \"clipboard\"]"
    )
    .expect("Failed to write config file");

    let config = AppConfig::load(Some(file.path())).expect("Failed to load config");
    assert_eq!(config.store.path, "/tmp/other.db");
    assert_eq!(config.store.limit, 25);
    assert_eq!(config.output.self_label, "Jess");
    assert_eq!(config.output.format, "json");
    assert!(!config.output.human_readable);
    assert_eq!(config.clipboard.command, "xclip");
    assert_eq!(config.clipboard.args, vec!["-selection", "clipboard"]);
    assert_eq!(config.code.max_digits, 6);
}

#[test]
fn test_load_rejects_invalid_file_values() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create config file");
    writeln!(file, "[code]\nmin_digits = 0\nmax_digits = 6").expect("Failed to write config file");

    assert!(AppConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    assert!(AppConfig::load(Some(&dir.path().join("missing.toml"))).is_err());
}

#[test]
fn test_get_log_level_default() {
    std::env::remove_var("RUST_LOG");
    let config = AppConfig::default();
    assert_eq!(config.get_log_level(), "warn");
}
