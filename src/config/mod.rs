//! Configuration management module
//!
//! This module handles loading, saving, and managing application configuration.
//! Configuration is stored in %APPDATA%\GestureLog\config.json with atomic writes
//! to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, DisplaySettings, GestureSettings, WindowState};
