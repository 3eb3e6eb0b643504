//! Constants used throughout the application
//!
//! This module centralizes magic strings, display placeholders, and limit
//! values to improve maintainability and consistency.

// Display placeholders for pairs whose zones have no cache row yet
pub const CLOCK_PLACEHOLDER: &str = "--";
pub const DIFF_PLACEHOLDER: &str = "Time difference: ?";

// Ticker limits
/// Default render tick period in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;
/// Minimum configurable tick period in milliseconds
pub const TICK_INTERVAL_MIN_MS: u64 = 100;
/// Maximum configurable tick period in milliseconds
pub const TICK_INTERVAL_MAX_MS: u64 = 60_000;

// Refresh limits
/// Default offset re-resolution period in minutes
pub const DEFAULT_AUTO_REFRESH_MINUTES: u64 = 60;
/// Maximum offset re-resolution period in minutes (24 hours)
pub const AUTO_REFRESH_MAX_MINUTES: u64 = 1_440;

// File locations under the platform config/data directories
pub const APP_DIR_NAME: &str = "zoneglance";
pub const DB_FILE_NAME: &str = "zoneglance.db";
pub const LOG_FILE_NAME: &str = "zoneglance.log";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "zoneglance.toml";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
