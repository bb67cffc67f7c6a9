//! Unit tests for the SettingsEngine public API.

use std::fs;

use tempfile::TempDir;

use mapfav::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use mapfav::types::errors::SettingsError;
use mapfav::types::settings::FavoritesSettings;

fn engine_in(dir: &TempDir) -> SettingsEngine {
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_file() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings, FavoritesSettings::default());
    assert_eq!(settings.capacity, 10);
    assert_eq!(settings.storage_key, "FAVORITES_V1");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), r#"{"capacity": 5}"#).unwrap();
    let mut engine = engine_in(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.capacity, 5);
    assert_eq!(settings.storage_key, "FAVORITES_V1");
}

#[test]
fn test_malformed_file_is_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), "{ nope").unwrap();
    let mut engine = engine_in(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_zero_capacity_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), r#"{"capacity": 0}"#).unwrap();
    let mut engine = engine_in(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::InvalidValue(_))));
}

#[test]
fn test_empty_storage_key_in_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), r#"{"storage_key": ""}"#).unwrap();
    let mut engine = engine_in(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::InvalidValue(_))));
    assert_eq!(*engine.get_settings(), FavoritesSettings::default());
}

#[test]
fn test_set_value_persists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    engine.load().unwrap();
    engine
        .set_value("share_base_url", serde_json::json!("https://maps.example/?q="))
        .unwrap();

    let mut reloaded = engine_in(&dir);
    assert_eq!(
        reloaded.load().unwrap().share_base_url,
        "https://maps.example/?q="
    );
}

#[test]
fn test_set_value_rejects_unknown_key_and_bad_value() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    engine.load().unwrap();

    assert!(matches!(
        engine.set_value("nope", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("capacity", serde_json::json!("ten")),
        Err(SettingsError::InvalidValue(_))
    ));
    assert!(matches!(
        engine.set_value("capacity", serde_json::json!(0)),
        Err(SettingsError::InvalidValue(_))
    ));
    assert_eq!(*engine.get_settings(), FavoritesSettings::default());
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    engine.load().unwrap();
    engine.set_value("capacity", serde_json::json!(3)).unwrap();
    assert_eq!(engine.get_settings().capacity, 3);

    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), FavoritesSettings::default());
}
