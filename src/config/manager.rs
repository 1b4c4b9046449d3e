//! Configuration manager for loading and saving application configuration
//!
//! This module provides functionality to load and save configuration to
//! %APPDATA%\GestureLog\config.json with atomic writes to prevent corruption.
//! When `APPDATA` is not set the current directory is used instead.

use crate::config::models::AppConfig;
use crate::error::{GestureLogError, Result, StringError};
use std::path::PathBuf;
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the application data directory
    ///
    /// Returns: %APPDATA%\GestureLog
    pub fn get_app_dir() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join("GestureLog")
    }

    /// Get the path to the configuration file
    ///
    /// Returns: %APPDATA%\GestureLog\config.json
    pub fn get_config_path() -> PathBuf {
        Self::get_app_dir().join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_path = Self::get_config_path();
        let config_dir = config_path
            .parent()
            .ok_or_else(|| GestureLogError::ConfigError(StringError::new("Invalid config path")))?;

        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default configuration.
    /// Out-of-range values are replaced with defaults.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(&config_path)?;

        match serde_json::from_str::<AppConfig>(&json) {
            Ok(mut config) => {
                if config.sanitize() {
                    warn!("Configuration contained invalid values; defaults substituted");
                }
                info!("Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Uses a temporary file and rename to ensure atomic write operation.
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_path = Self::get_config_path();
        let config_dir = Self::ensure_config_dir()?;

        let temp_path = config_dir.join("config.json.tmp");
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, config_path)?;

        info!("Configuration saved successfully");
        Ok(())
    }
}
