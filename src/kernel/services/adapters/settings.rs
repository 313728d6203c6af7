use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::kernel::config::ScopeConfig;

const SETTINGS_DIR: &str = ".zscope";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scope: ScopeConfig,
}

pub fn get_settings_path() -> PathBuf {
    settings_root().join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Creates the settings file with defaults when it does not exist yet.
pub fn ensure_settings_file_at(path: &Path) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default()).map_err(|source| {
            SettingsError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        std::fs::write(path, content).map_err(io_err)?;
    }
    Ok(())
}

pub fn ensure_settings_file() -> Result<PathBuf, SettingsError> {
    let path = get_settings_path();
    ensure_settings_file_at(&path)?;
    Ok(path)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| SettingsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings from the default location; defaults when the file is missing or
/// broken.
pub fn load_settings() -> Settings {
    let path = get_settings_path();
    if !path.exists() {
        return Settings::default();
    }
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(error = %error, "load_settings failed, using defaults");
            Settings::default()
        }
    }
}

/// Platform cache dir, or the temp dir when the platform reports none.
fn settings_root() -> PathBuf {
    dirs::cache_dir().unwrap_or_else(std::env::temp_dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
