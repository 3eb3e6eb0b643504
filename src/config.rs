//! TOML configuration: discovery, parsing, validation, and generation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    APP_DIR_NAME, AUTO_REFRESH_MAX_MINUTES, CONFIG_FILE_NAME, CONFIG_GENERATED,
    DEFAULT_AUTO_REFRESH_MINUTES, DEFAULT_TICK_INTERVAL_MS, LOCAL_CONFIG_FILE_NAME,
    TICK_INTERVAL_MAX_MS, TICK_INTERVAL_MIN_MS,
};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ticker: TickerConfig,
    pub refresh: RefreshConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Render ticker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    /// Render tick period in milliseconds
    pub interval_ms: u64,
}

/// Offset re-resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Re-run the offset resolver every N minutes (0 = disabled; offsets
    /// are then only refreshed on add/edit/manual refresh)
    pub auto_refresh_interval_minutes: u64,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Use a throwaway in-memory database
    pub in_memory: bool,
    /// Database file path; defaults to the platform data directory
    pub path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Log level filter: off, error, warn, info, debug, trace
    pub level: String,
    /// Log file path; defaults to the platform data directory
    pub file: Option<PathBuf>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            auto_refresh_interval_minutes: DEFAULT_AUTO_REFRESH_MINUTES,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence: the working
    /// directory first, then the XDG config directory.
    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        let xdg = dirs::config_dir()?.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
        xdg.exists().then_some(xdg)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ticker.interval_ms < TICK_INTERVAL_MIN_MS
            || self.ticker.interval_ms > TICK_INTERVAL_MAX_MS
        {
            anyhow::bail!(
                "interval_ms must be between {} and {} milliseconds, got {}",
                TICK_INTERVAL_MIN_MS,
                TICK_INTERVAL_MAX_MS,
                self.ticker.interval_ms
            );
        }

        if self.refresh.auto_refresh_interval_minutes > AUTO_REFRESH_MAX_MINUTES {
            anyhow::bail!(
                "auto_refresh_interval_minutes cannot exceed {} (24 hours)",
                AUTO_REFRESH_MAX_MINUTES
            );
        }

        self.logging
            .level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.logging.level))?;

        Ok(())
    }

    /// Write a commented default configuration file, creating its parent
    /// directory when needed.
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let body = toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default config")?;
        let stamped = format!(
            "# Zoneglance Configuration File\n# Generated on {}\n\n{body}",
            chrono::Local::now().format("%Y-%m-%d")
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(path, stamped)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }

    /// Where `--generate-config` writes by default.
    pub fn get_default_config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
