mod common;

use spekit_core::config::{AppConfig, ExtractionConfig, SnrConfig};
use spekit_core::error::SpekitError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_extraction_defaults() {
    let c = ExtractionConfig::default();
    assert_eq!(c.recording_extension, "spe");
    assert_eq!(c.output_extension, "tiff");
    assert_eq!(c.frame_prefix, "frame_");
    assert!(c.skip_failed_recordings);
}

#[test]
fn test_snr_defaults() {
    let c = SnrConfig::default();
    assert_eq!(c.image_extension, "tiff");
    assert_eq!(c.report_filename, "snr_average_min_max.txt");
}

#[test]
fn test_default_config_is_valid() {
    assert!(AppConfig::default().validate().is_ok());
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_toml_roundtrip() {
    let config = AppConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: AppConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let parsed: AppConfig = toml::from_str(
        r#"
        [extraction]
        skip_failed_recordings = false
        "#,
    )
    .unwrap();
    assert!(!parsed.extraction.skip_failed_recordings);
    assert_eq!(parsed.extraction.output_extension, "tiff");
    assert_eq!(parsed.snr, SnrConfig::default());
}

#[test]
fn test_empty_toml_is_default() {
    let parsed: AppConfig = toml::from_str("").unwrap();
    assert_eq!(parsed, AppConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spekit.toml");
    common::write_file(
        &path,
        b"[snr]\nreport_filename = \"report.txt\"\n",
    );
    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.snr.report_filename, "report.txt");
}

#[test]
fn test_load_rejects_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    common::write_file(&path, b"[extraction\n");
    assert!(matches!(AppConfig::load(&path), Err(SpekitError::Config(_))));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_rejects_dotted_extension() {
    let c = ExtractionConfig {
        output_extension: ".tiff".into(),
        ..Default::default()
    };
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("output_extension"), "got: {err}");
}

#[test]
fn test_rejects_empty_prefix() {
    let c = ExtractionConfig {
        frame_prefix: String::new(),
        ..Default::default()
    };
    assert!(matches!(c.validate(), Err(SpekitError::Config(_))));
}

#[test]
fn test_rejects_report_name_with_separator() {
    let c = SnrConfig {
        report_filename: "../escape.txt".into(),
        ..Default::default()
    };
    assert!(c.validate().is_err());
}
