//! Configuration management for voicechat.
//!
//! Handles loading and saving the TOML configuration file with
//! cross-platform paths and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{CaptureSection, DisplayConfig, PlaybackConfig, TimerConfig},
};

use std::{fs, io::Write, panic::Location, path::PathBuf, time::Duration};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use voicechat_core::SurfaceOptions;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Capture device configuration.
    #[serde(default)]
    pub capture: CaptureSection,
    /// Playback engine configuration.
    #[serde(default)]
    pub playback: PlaybackConfig,
    /// Recording timer configuration.
    #[serde(default)]
    pub timer: TimerConfig,
    /// Timeline rendering configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config = Self::parse(&contents)?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!("No config found, creating default");
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Parse and validate a TOML document. Missing sections take defaults.
    #[track_caller]
    pub fn parse(contents: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Reject values the surface cannot run with.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        if self.timer.tick_period_ms == 0 {
            return Err(AppError::ConfigError {
                reason: "timer.tick_period_ms must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.capture.channels == Some(0) {
            return Err(AppError::ConfigError {
                reason: "capture.channels must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// Save configuration to disk using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, &config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Options for mounting the chat surface.
    pub fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            capture: (&self.capture).into(),
            playback_category: self.playback.category.clone(),
            tick_period: Duration::from_millis(self.timer.tick_period_ms),
        }
    }

    /// Directory for rolling log files, created if missing.
    #[track_caller]
    pub fn log_dir() -> AppResult<PathBuf> {
        let log_dir = Self::project_dirs()?.data_local_dir().join("logs");

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = Self::project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "voicechat", "Voicechat").ok_or_else(|| AppError::ConfigError {
            reason: "Failed to get project directories".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
