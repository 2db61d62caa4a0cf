//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use mountview_domain::{ChartConfig, MountviewError};
use mountview_infra::config;
use tempfile::{Builder, NamedTempFile};

fn config_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    file
}

#[test]
fn test_load_config_from_json_file() {
    let file = config_file(
        ".json",
        r#"{
            "sheets": {
                "endpoint": "https://proxy.test/macros/exec",
                "spreadsheet_id": "sheet-7",
                "company_id": "mountview",
                "timeout_secs": 10
            },
            "server": { "bind_address": "0.0.0.0:8080" }
        }"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config from JSON file");

    assert_eq!(config.sheets.endpoint, "https://proxy.test/macros/exec");
    assert_eq!(config.sheets.spreadsheet_id.as_deref(), Some("sheet-7"));
    assert_eq!(config.sheets.company_id.as_deref(), Some("mountview"));
    assert_eq!(config.sheets.timeout_secs, 10);
    assert_eq!(config.sheets.max_attempts, 3);
    assert_eq!(config.chart, ChartConfig::default());
    assert_eq!(config.server.bind_address, "0.0.0.0:8080");
}

#[test]
fn test_load_config_from_toml_file() {
    let file = config_file(
        ".toml",
        r#"
[sheets]
endpoint = "https://proxy.test/macros/exec"
max_attempts = 5

[chart]
width = 1024.0
height = 480.0
padding = 40.0
"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    assert_eq!(config.sheets.max_attempts, 5);
    assert_eq!(config.sheets.company_id, None);
    assert_eq!(config.chart, ChartConfig { width: 1024.0, height: 480.0, padding: 40.0 });
}

#[test]
fn test_load_config_missing_sheets_section() {
    let file = config_file(".toml", "[chart]\nwidth = 10.0\nheight = 10.0\npadding = 1.0\n");

    let result = config::load_from_file(Some(file.path().to_path_buf()));

    assert!(matches!(result, Err(MountviewError::Config(_))));
}

#[test]
fn test_load_config_invalid_json() {
    let file = config_file(".json", r#"{ "sheets": { "endpoint": "#);

    let err = config::load_from_file(Some(file.path().to_path_buf())).unwrap_err();

    match err {
        MountviewError::Config(msg) => assert!(msg.contains("Invalid JSON")),
        other => panic!("expected config error, got {:?}", other),
    }
}
