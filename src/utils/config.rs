//! Configuration management for the cinema playback controller
//!
//! This module handles loading and managing controller configuration.
//! The constants here mirror the tuning of the movie-player page: a 50 px
//! swipe threshold, 10 second seeks, 0.1 volume/brightness steps, a
//! 3 second overlay auto-hide and a 10 second progress-save interval.

use crate::utils::error::{CinemaError, IntoCinemaError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Touch gesture tuning
    pub gestures: GestureConfig,

    /// Playback step sizes
    pub playback: PlaybackConfig,

    /// Overlay and indicator timing
    pub overlay: OverlayConfig,

    /// Progress persistence settings
    pub persistence: PersistenceConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Touch gesture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum displacement in pixels to classify a touch as a swipe
    pub swipe_threshold_px: f64,

    /// Two taps within this window count as a double tap
    pub double_tap_window_ms: u64,

    /// Width of the player viewport, used to split vertical swipes into
    /// a brightness half (left) and a volume half (right)
    pub viewport_width_px: f64,
}

/// Playback step configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Seconds skipped per horizontal swipe or arrow key
    pub seek_step_secs: f64,

    /// Volume change per vertical swipe or arrow key (0.0 to 1.0)
    pub volume_step: f64,

    /// Brightness change per vertical swipe on the left half
    pub brightness_step: f64,
}

/// Overlay and indicator timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Idle time before the control overlay hides during playback
    pub auto_hide_ms: u64,

    /// Settle delay before revealing controls after an orientation change
    pub orientation_settle_ms: u64,

    /// How long the volume/brightness indicator stays before fading
    pub indicator_fade_ms: u64,

    /// How long a seek direction indicator is flashed
    pub gesture_flash_ms: u64,
}

/// Progress persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Base URL of the movie server
    pub server_url: String,

    /// Path of the progress endpoint on the server
    pub endpoint_path: String,

    /// Seconds between periodic progress snapshots
    pub save_interval_secs: u64,

    /// Explicit filename to report, overriding URL-based resolution
    pub filename: Option<String>,

    /// Path of the playback page, used as the filename fallback
    pub page_path: String,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gestures: GestureConfig::default(),
            playback: PlaybackConfig::default(),
            overlay: OverlayConfig::default(),
            persistence: PersistenceConfig::default(),
            general: GeneralConfig::default(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50.0,
            double_tap_window_ms: 500,
            viewport_width_px: 1280.0,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            seek_step_secs: 10.0,
            volume_step: 0.1,
            brightness_step: 0.1,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: 3000,
            orientation_settle_ms: 500,
            indicator_fade_ms: 1500,
            gesture_flash_ms: 1000,
        }
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            endpoint_path: "/save-progress".to_string(),
            save_interval_secs: 10,
            filename: None,
            page_path: "/watch/movie.mp4".to_string(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources
    /// override earlier):
    /// 1. Default values
    /// 2. User config file (~/.config/cinema-controls/config.toml on Linux)
    /// 3. Environment variables (CINEMA_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config.merge_from_file(&user_path)?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path()
            .ok_or_else(|| CinemaError::Config("Cannot determine user config path".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).config_err("Failed to create config directory")?;
        }

        let toml = toml::to_string_pretty(self).config_err("Failed to serialize config")?;
        std::fs::write(&path, toml).config_err("Failed to write config file")?;

        Ok(())
    }

    /// Merge configuration from a TOML file
    pub fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path).config_err("Failed to read config file")?;

        let file_config: Config =
            toml::from_str(&contents).config_err("Failed to parse config file")?;

        *self = file_config;

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("CINEMA_SERVER_URL") {
            self.persistence.server_url = url;
        }

        if let Ok(interval) = std::env::var("CINEMA_SAVE_INTERVAL_SECS") {
            self.persistence.save_interval_secs = interval
                .parse()
                .map_err(|_| CinemaError::Config("Invalid CINEMA_SAVE_INTERVAL_SECS".to_string()))?;
        }

        if let Ok(filename) = std::env::var("CINEMA_FILENAME") {
            self.persistence.filename = Some(filename);
        }

        if let Ok(log_level) = std::env::var("CINEMA_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.gestures.swipe_threshold_px <= 0.0 {
            return Err(CinemaError::Config(
                "Swipe threshold must be positive".to_string(),
            ));
        }

        if self.gestures.viewport_width_px <= 0.0 {
            return Err(CinemaError::Config(
                "Viewport width must be positive".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.playback.volume_step) || self.playback.volume_step == 0.0 {
            return Err(CinemaError::Config(
                "Volume step must be in (0.0, 1.0]".to_string(),
            ));
        }

        if self.persistence.save_interval_secs == 0 {
            return Err(CinemaError::Config(
                "Save interval must be non-zero".to_string(),
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(CinemaError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get user config file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cinema-controls").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.gestures.swipe_threshold_px, 50.0);
        assert_eq!(config.gestures.double_tap_window_ms, 500);
        assert_eq!(config.playback.seek_step_secs, 10.0);
        assert_eq!(config.overlay.auto_hide_ms, 3000);
        assert_eq!(config.persistence.save_interval_secs, 10);
        assert_eq!(config.persistence.endpoint_path, "/save-progress");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.gestures.swipe_threshold_px = 0.0;
        assert!(config.validate().is_err());

        config.gestures.swipe_threshold_px = 50.0;
        config.playback.volume_step = 0.0;
        assert!(config.validate().is_err());

        config.playback.volume_step = 0.1;
        config.general.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml).unwrap();

        assert_eq!(
            config.gestures.swipe_threshold_px,
            deserialized.gestures.swipe_threshold_px
        );
        assert_eq!(
            config.persistence.server_url,
            deserialized.persistence.server_url
        );
    }

    #[test]
    fn test_merge_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Config::default();
        custom.persistence.filename = Some("matrix.mp4".to_string());
        custom.playback.seek_step_secs = 30.0;
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        let mut config = Config::default();
        config.merge_from_file(file.path()).unwrap();
        assert_eq!(config.persistence.filename.as_deref(), Some("matrix.mp4"));
        assert_eq!(config.playback.seek_step_secs, 30.0);
    }
}
