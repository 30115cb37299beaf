//! Configuration builder, validation and JSON loading

use kodegen_tools_pastedown::config::{BulletMarker, CodeBlockStyle, HeadingStyle, PasteConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = PasteConfig::default();
    assert_eq!(config.heading_style(), HeadingStyle::Atx);
    assert_eq!(config.hr_token(), "---");
    assert_eq!(config.bullet_marker(), BulletMarker::Asterisk);
    assert_eq!(config.code_block_style(), CodeBlockStyle::Fenced);
    assert_eq!(config.em_delimiter(), "_");
    assert_eq!(config.max_html_bytes(), 10 * 1024 * 1024);
}

#[test]
fn test_builder_rejects_invalid_values() {
    assert!(PasteConfig::builder().em_delimiter("~").build().is_err());
    assert!(PasteConfig::builder().hr_token("--").build().is_err());
    assert!(PasteConfig::builder().hr_token("-*-").build().is_err());
    assert!(PasteConfig::builder().max_html_bytes(0).build().is_err());
}

#[test]
fn test_builder_sets_fields() {
    let config = PasteConfig::builder()
        .heading_style(HeadingStyle::Setext)
        .bullet_marker(BulletMarker::Dash)
        .hr_token("___")
        .build()
        .expect("valid config");
    assert_eq!(config.heading_style(), HeadingStyle::Setext);
    assert_eq!(config.bullet_marker(), BulletMarker::Dash);
    assert_eq!(config.hr_token(), "___");
}

#[test]
fn test_partial_json_uses_defaults() {
    let config = PasteConfig::from_json_str(r#"{"bullet_marker": "dash", "em_delimiter": "*"}"#)
        .expect("valid json");
    assert_eq!(config.bullet_marker(), BulletMarker::Dash);
    assert_eq!(config.em_delimiter(), "*");
    assert_eq!(config.hr_token(), "---");
}

#[test]
fn test_json_validation_errors() {
    assert!(PasteConfig::from_json_str(r#"{"em_delimiter": "+"}"#).is_err());
    assert!(PasteConfig::from_json_str(r#"{"heading_style": "fancy"}"#).is_err());
    assert!(PasteConfig::from_json_str("not json").is_err());
}

#[test]
fn test_json_roundtrip_through_file() {
    let config = PasteConfig::builder()
        .code_block_style(CodeBlockStyle::Indented)
        .max_html_bytes(4096)
        .build()
        .expect("valid config");

    let mut file = NamedTempFile::new().expect("temp file");
    let json = serde_json::to_string_pretty(&config).expect("serialize");
    file.write_all(json.as_bytes()).expect("write");

    let loaded = PasteConfig::from_json_file(file.path()).expect("load");
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_reports_path() {
    let err = PasteConfig::from_json_file("/nonexistent/pastedown.json").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/pastedown.json"));
}
