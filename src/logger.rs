//! File logging setup.
//!
//! Wires the `log` facade to a timestamped file dispatcher when logging is
//! enabled in the configuration. Must be called at most once, before any
//! log statements that should be captured.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Initialize file logging from the `[logging]` config section. A disabled
/// section is a no-op.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = config
        .level
        .parse::<log::LevelFilter>()
        .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", config.level))?;

    let path = match &config.file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(fern::log_file(&path).with_context(|| {
            format!("Failed to open log file: {}", path.display())
        })?)
        .apply()
        .context("Logger already initialized")?;

    Ok(())
}

fn default_log_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
