//! Application configuration.
//!
//! Loaded from `config.toml` in the application data directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreference::Light => write!(f, "Light"),
            ThemePreference::Dark => write!(f, "Dark"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageSettings,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            ui: UiSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

impl AppConfig {
    /// Directory holding the persisted key-value blobs.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(get_data_dir)
            .join("storage")
    }
}

/// UI-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Theme
    pub theme: ThemePreference,
    /// Font scale multiplier
    pub font_scale: f32,
}

impl UiSettings {
    /// Smallest accepted font scale
    pub const MIN_FONT_SCALE: f32 = 0.5;
    /// Largest accepted font scale
    pub const MAX_FONT_SCALE: f32 = 3.0;

    /// Font scale limited to a usable range. Non-finite values fall back to 1.0.
    pub fn clamped_font_scale(&self) -> f32 {
        if self.font_scale.is_finite() {
            self.font_scale.clamp(Self::MIN_FONT_SCALE, Self::MAX_FONT_SCALE)
        } else {
            1.0
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Light,
            font_scale: 1.0,
        }
    }
}

/// Storage-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Override for the data directory
    pub data_dir: Option<PathBuf>,
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "moveasy", "Moveasy")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`, defaults if it does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
