//! Integration tests for configuration loading.

mod common;

use alsref::config::{load_config, load_config_or_default, Config};
use alsref::{CodecOptions, Variant};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.codec, CodecOptions::strict());
    assert_eq!(config.fileref.variant, Variant::Format);
    assert!(!config.fileref.keep_external);
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.codec, CodecOptions::default());
    assert_eq!(config.fileref.variant, Variant::Format);
}

#[test]
fn full_file() {
    common::init_tracing();
    let file = write_config(
        r#"
[codec]
verify_length = false
verify_redundant_fields = true

[fileref]
variant = "disk_location"
keep_external = true
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert!(!config.codec.verify_length);
    assert!(config.codec.verify_redundant_fields);
    assert_eq!(config.fileref.variant, Variant::DiskLocation);
    assert!(config.fileref.keep_external);
}

#[test]
fn partial_sections_fill_in_defaults() {
    let file = write_config(
        r#"
[codec]
verify_redundant_fields = false
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert!(config.codec.verify_length);
    assert!(!config.codec.verify_redundant_fields);
    assert_eq!(config.fileref.variant, Variant::Format);
}

#[test]
fn unknown_variant_is_rejected() {
    let file = write_config(
        r#"
[fileref]
variant = "classic"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alsref.toml");
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn explicit_path_wins() {
    let file = write_config(
        r#"
[fileref]
variant = "disk_location"
"#,
    );

    let config = load_config_or_default(Some(file.path())).unwrap();
    assert_eq!(config.fileref.variant, Variant::DiskLocation);
}

#[test]
fn round_trips_through_toml() {
    let mut config = Config::default();
    config.codec = CodecOptions::lenient();
    config.fileref.variant = Variant::DiskLocation;

    let text = toml::to_string(&config).unwrap();
    let file = write_config(&text);
    let loaded = load_config(file.path()).unwrap();

    assert_eq!(loaded.codec, CodecOptions::lenient());
    assert_eq!(loaded.fileref.variant, Variant::DiskLocation);
}
