//! Main application configuration
//!
//! This module defines the primary configuration structures for the matboj
//! leaderboard, including environment variable loading, TOML file loading
//! and validation.

use crate::config::{DisplayConfig, RatingConfig};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub storage: StorageSettings,
    pub rating: RatingConfig,
    pub display: DisplayConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name shown in logs and the startup banner
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where the roster and the game state live
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Roster file, one participant name per line
    pub roster_path: PathBuf,
    /// JSON game state file
    pub state_path: PathBuf,
    /// Save the game state after every match and undo
    pub autosave: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "matboj".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from("people.txt"),
            state_path: PathBuf::from("game_state.json"),
            autosave: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still override it
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse a TOML document; missing sections and keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("MATBOJ_SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("MATBOJ_LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Storage settings
        if let Ok(path) = env::var("MATBOJ_ROSTER_PATH") {
            self.storage.roster_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("MATBOJ_STATE_PATH") {
            self.storage.state_path = PathBuf::from(path);
        }
        if let Ok(autosave) = env::var("MATBOJ_AUTOSAVE") {
            self.storage.autosave = autosave
                .parse()
                .map_err(|_| anyhow!("Invalid MATBOJ_AUTOSAVE value: {}", autosave))?;
        }

        // Rating settings
        if let Ok(rank) = env::var("MATBOJ_INITIAL_RANK") {
            self.rating.initial_rank = rank
                .parse()
                .map_err(|_| anyhow!("Invalid MATBOJ_INITIAL_RANK value: {}", rank))?;
        }

        // Display settings
        if let Ok(columns) = env::var("MATBOJ_COLUMNS") {
            self.display.columns = columns
                .parse()
                .map_err(|_| anyhow!("Invalid MATBOJ_COLUMNS value: {}", columns))?;
        }
        if let Ok(color) = env::var("MATBOJ_COLOR") {
            self.display.color = color
                .parse()
                .map_err(|_| anyhow!("Invalid MATBOJ_COLOR value: {}", color))?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate storage paths
    if config.storage.roster_path.as_os_str().is_empty() {
        return Err(anyhow!("Roster path cannot be empty"));
    }
    if config.storage.state_path.as_os_str().is_empty() {
        return Err(anyhow!("State path cannot be empty"));
    }

    // Validate rating formula
    if !config.rating.initial_rank.is_finite() {
        return Err(anyhow!("Initial rank must be a finite number"));
    }
    if !config.rating.win_bonus.is_finite() {
        return Err(anyhow!("Win bonus must be a finite number"));
    }
    if !config.rating.gap_divisor.is_finite() || config.rating.gap_divisor <= 0.0 {
        return Err(anyhow!("Gap divisor must be positive"));
    }

    // Validate display
    if config.display.columns == 0 {
        return Err(anyhow!("Display columns must be greater than 0"));
    }

    Ok(())
}
