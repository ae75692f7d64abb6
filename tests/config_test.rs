//! Config file discovery and loading.

use std::fs;
use tictactoe_replay::{AppConfig, DEFAULT_CONFIG_FILE};
use tictactoe_session::DisplayOrder;

#[test]
fn test_discover_without_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig::discover(None, dir.path()).expect("defaults");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.display_order(), &DisplayOrder::Ascending);
}

#[test]
fn test_discover_reads_default_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "display_order = \"descending\"\nlog_filter = \"debug\"\n",
    )
    .expect("write config");

    let config = AppConfig::discover(None, dir.path()).expect("config loads");
    assert_eq!(config.display_order(), &DisplayOrder::Descending);
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_explicit_path_wins_over_default_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "display_order = \"descending\"\n",
    )
    .expect("write default config");
    let explicit = dir.path().join("custom.toml");
    fs::write(&explicit, "log_file = \"custom.log\"\n").expect("write custom config");

    let config = AppConfig::discover(Some(&explicit), dir.path()).expect("config loads");
    assert_eq!(config.display_order(), &DisplayOrder::Ascending);
    assert_eq!(config.log_file().to_str(), Some("custom.log"));
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    let err = AppConfig::discover(Some(&missing), dir.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_override_display_order() {
    let config = AppConfig::default().with_display_order(DisplayOrder::Descending);
    assert_eq!(config.display_order(), &DisplayOrder::Descending);
    assert_eq!(config.log_filter(), "info");
}
