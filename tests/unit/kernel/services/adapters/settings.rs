use super::*;
use crate::core::CommandId;
use tempfile::tempdir;

#[test]
fn test_ensure_settings_file_writes_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();

    assert_eq!(settings, Settings::default());
    assert!(settings.scope.exclusive);
}

#[test]
fn test_ensure_settings_file_keeps_existing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "scope": { "exclusive": false } }"#).unwrap();

    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();

    assert!(!settings.scope.exclusive);
    assert!(settings
        .scope
        .is_exempt(Some(&CommandId::list_documents())));
}

#[test]
fn test_empty_object_is_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{}").unwrap();

    assert_eq!(load_settings_from(&path).unwrap(), Settings::default());
}

#[test]
fn test_invalid_json_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        load_settings_from(&path),
        Err(SettingsError::Json { .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        load_settings_from(&dir.path().join("absent.json")),
        Err(SettingsError::Io { .. })
    ));
}

#[test]
fn test_settings_path_lives_under_zscope_dir() {
    let path = get_settings_path();
    assert!(path.ends_with(".zscope/settings.json"));
    assert!(path.is_absolute());
}
