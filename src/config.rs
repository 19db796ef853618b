//! Configuration file support for zonedraw.
//!
//! Settings are stored as versioned JSON. Native builds keep the file in the
//! platform config directory; the wasm build receives the JSON from its host.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_NOTICE_DURATION_MS;
use crate::format::FormatSelection;
use crate::input::KeyBindings;
use crate::session::OutputSize;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Make this the global `log` filter.
    pub fn apply(&self) {
        log::set_max_level(self.to_level_filter());
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Output format chosen for each mode
    #[serde(default)]
    pub formats: FormatSelection,

    /// Keybinding configuration
    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Logical output width used before an image is loaded
    #[serde(default = "default_output_width")]
    pub output_width: u32,

    /// Logical output height used before an image is loaded
    #[serde(default = "default_output_height")]
    pub output_height: u32,

    /// How long validation notices stay visible
    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u64,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_output_width() -> u32 {
    OutputSize::default().width
}

fn default_output_height() -> u32 {
    OutputSize::default().height
}

fn default_notice_duration_ms() -> u64 {
    DEFAULT_NOTICE_DURATION_MS
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            output_width: default_output_width(),
            output_height: default_output_height(),
            notice_duration_ms: default_notice_duration_ms(),
            log_level: LogLevel::default(),
        }
    }
}

impl UserPreferences {
    /// Output size to start sessions with. Zero dimensions fall back to the default.
    pub fn output_size(&self) -> OutputSize {
        let default = OutputSize::default();
        OutputSize::new(
            if self.output_width == 0 {
                default.width
            } else {
                self.output_width
            },
            if self.output_height == 0 {
                default.height
            } else {
                self.output_height
            },
        )
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: UserPreferences::default(),
            formats: FormatSelection::default(),
            keybindings: KeyBindings::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "zonedraw-config.json"
    }

    /// Get the default config file path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("zonedraw").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("zonedraw")
                    .join(Self::default_filename())
            })
        }
    }

    /// Read and parse a config file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Write the configuration, creating parent directories if needed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{PeopleFormat, RoiFormat};
    use crate::input::{Key, KeyBinding};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.preferences.output_size(), OutputSize::new(1280, 720));
        assert_eq!(
            config.preferences.notice_duration(),
            Duration::from_millis(2800)
        );
        assert_eq!(config.formats.roi, RoiFormat::Json);
        assert_eq!(config.formats.people, PeopleFormat::Standard);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = AppConfig::new();
        config.preferences.output_width = 1920;
        config.preferences.log_level = LogLevel::Debug;
        config.formats.people = PeopleFormat::Combined;
        config.keybindings.finish = KeyBinding::plain(Key::Space);

        let json = config.to_json().unwrap();
        let loaded = AppConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_minimal_file_uses_defaults() {
        let config = AppConfig::from_json(r#"{"version": 1}"#).unwrap();
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_json(
            r#"{"version": 1, "preferences": {"output_height": 1080}, "formats": {"roi": "flat"}}"#,
        )
        .unwrap();
        assert_eq!(config.preferences.output_size(), OutputSize::new(1280, 1080));
        assert_eq!(config.formats.roi, RoiFormat::Flat);
        assert_eq!(config.formats.people, PeopleFormat::Standard);
    }

    #[test]
    fn test_version_too_new() {
        let err = AppConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_zero_output_size_falls_back() {
        let prefs = UserPreferences {
            output_width: 0,
            ..UserPreferences::default()
        };
        assert_eq!(prefs.output_size(), OutputSize::new(1280, 720));
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::default().name(), "Info");
    }

    #[test]
    fn test_log_level_from_config_applies() {
        let config =
            AppConfig::from_json(r#"{"version":1,"preferences":{"log_level":"debug"}}"#).unwrap();
        config.preferences.log_level.apply();
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
        LogLevel::default().apply();
        assert_eq!(log::max_level(), log::LevelFilter::Info);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("zonedraw-config-test-{}", std::process::id()));
        let path = dir.join("nested").join(AppConfig::default_filename());

        let mut config = AppConfig::new();
        config.preferences.notice_duration_ms = 500;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
