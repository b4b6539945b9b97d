use mediatrack_app::{TrackerConfig, TrackerError};
use mediatrack_model::MissingTotal;
use mediatrack_storage::DEFAULT_STORAGE_KEY;
use mediatrack_types::StatusChangeMode;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn empty_toml_gives_defaults() {
    let config = TrackerConfig::from_toml("").unwrap();
    assert_eq!(config, TrackerConfig::default());
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.status_mode, StatusChangeMode::Select);
    assert_eq!(config.missing_total, MissingTotal::Unbounded);
}

#[test]
fn all_keys_parse() {
    let config = TrackerConfig::from_toml(
        r#"
        data_dir = "/srv/media"
        storage_key = "shelf"
        status_mode = "cycle"
        missing_total = "one"
        "#,
    )
    .unwrap();
    assert_eq!(config.data_dir, Some(PathBuf::from("/srv/media")));
    assert_eq!(config.storage_key, "shelf");
    assert_eq!(config.status_mode, StatusChangeMode::Cycle);
    assert_eq!(config.missing_total, MissingTotal::One);
    assert_eq!(config.resolved_data_dir(), PathBuf::from("/srv/media"));
}

#[test]
fn bad_mode_is_config_error() {
    let err = TrackerConfig::from_toml(r#"status_mode = "spin""#).unwrap_err();
    assert!(matches!(err, TrackerError::Config(_)));
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = TrackerConfig::load(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, TrackerConfig::default());
}

#[test]
fn load_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "status_mode = \"cycle\"\n").unwrap();
    let config = TrackerConfig::load(&path).unwrap();
    assert_eq!(config.status_mode, StatusChangeMode::Cycle);
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}
