//! Configuration management for the date calculator
//!
//! This module handles loading, parsing, and validation of configuration files.
//! Configuration is read-only at runtime: nothing here writes user choices back.

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_OFFSET_LIMIT, MAX_OFFSET_LIMIT};
use crate::utils::datetime;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub calculation: CalculationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Calculation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Count only Monday through Friday
    pub business_mode: bool,
    /// Largest magnitude accepted for each offset component; larger values are clamped
    pub offset_limit: i64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for results and for parsing input dates
    pub date_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file in the cache directory
    pub enabled: bool,
    /// Log file level: off, error, warn, info, debug or trace
    pub level: String,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            business_mode: false,
            offset_limit: DEFAULT_OFFSET_LIMIT,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DISPLAY_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            log::debug!("Loading configuration from {}", path.display());
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path().ok()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let limit = self.calculation.offset_limit;
        if !(1..=MAX_OFFSET_LIMIT).contains(&limit) {
            anyhow::bail!("offset_limit must be between 1 and {}, got {}", MAX_OFFSET_LIMIT, limit);
        }

        // The display format is also used to read dates back, so it must round-trip
        let probe = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).context("Invalid probe date")?;
        let rendered = datetime::format_date(probe, &self.display.date_format)
            .with_context(|| format!("Invalid date_format '{}'", self.display.date_format))?;
        match chrono::NaiveDate::parse_from_str(&rendered, &self.display.date_format) {
            Ok(parsed) if parsed == probe => {}
            _ => anyhow::bail!(
                "date_format '{}' cannot be parsed back into a date",
                self.display.date_format
            ),
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Date Calculator Configuration File\n# Generated on {}\n\n",
            datetime::format_ymd(datetime::today())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
