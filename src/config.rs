//! Application configuration module
//!
//! Settings are persisted with `confy`, which picks the OS-specific config
//! directory. Every field carries `#[serde(default)]` so partial files load.

use crate::compare::ComparisonOptions;
use crate::constant::{
    APP_NAME, DEFAULT_FONT_SIZE, DEFAULT_MAX_INPUT_BYTES, DEFAULT_MAX_INPUT_LINES, DEFAULT_TOAST_SECONDS,
};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = confy::load_path(path)?;
        info!("Load config from {:?}", path);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, &self.settings)?;
        info!("Save config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Directory the open-file dialog starts in
    /// Falls back to the working directory if no user dirs are known
    pub fn open_dir(&self) -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Comparison options the workbench starts with
    pub fn default_options(&self) -> ComparisonOptions {
        ComparisonOptions {
            ignore_case: self.settings.default_ignore_case,
            ignore_whitespace: self.settings.default_ignore_whitespace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Side,
    Inline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// System font family used for the diff panes, if installed
    #[serde(default)]
    pub monospace_font: Option<String>,

    #[serde(default)]
    pub default_ignore_case: bool,

    #[serde(default)]
    pub default_ignore_whitespace: bool,

    #[serde(default)]
    pub default_view_mode: ViewMode,

    /// Comparisons whose combined input exceeds this are refused
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// Comparisons with more lines than this, both sides together, are refused
    #[serde(default = "default_max_input_lines")]
    pub max_input_lines: usize,

    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: f32,
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

fn default_max_input_lines() -> usize {
    DEFAULT_MAX_INPUT_LINES
}

fn default_toast_seconds() -> f32 {
    DEFAULT_TOAST_SECONDS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_size: DEFAULT_FONT_SIZE,
            monospace_font: None,
            default_ignore_case: false,
            default_ignore_whitespace: false,
            default_view_mode: ViewMode::Side,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_input_lines: DEFAULT_MAX_INPUT_LINES,
            toast_seconds: DEFAULT_TOAST_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use uuid::Uuid;

    fn test_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("test_config_{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cleanup_test_dir(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = test_dir();
        let path = dir.join("settings.toml");

        let mut config = Config {
            settings: Settings::default(),
        };
        config.settings.theme = Theme::Dark;
        config.settings.default_ignore_whitespace = true;
        config.settings.default_view_mode = ViewMode::Inline;
        config.settings.max_input_bytes = 1024;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.theme, Theme::Dark);
        assert_eq!(loaded.settings.default_view_mode, ViewMode::Inline);
        assert_eq!(loaded.settings.max_input_bytes, 1024);
        assert_eq!(
            loaded.default_options(),
            ComparisonOptions {
                ignore_case: false,
                ignore_whitespace: true,
            }
        );

        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = test_dir();
        let path = dir.join("partial.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.theme, Theme::Dark);
        assert_eq!(loaded.settings.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
        assert_eq!(loaded.settings.toast_seconds, DEFAULT_TOAST_SECONDS);
        assert_eq!(loaded.settings.default_view_mode, ViewMode::Side);
        assert!(loaded.settings.monospace_font.is_none());

        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = test_dir();
        let path = dir.join("fresh.toml");

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.font_size, DEFAULT_FONT_SIZE);
        assert!(path.exists());

        cleanup_test_dir(&dir);
    }
}
