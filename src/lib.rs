//! Zoneglance - live comparison of IANA time-zone pairs
//!
//! This library keeps a user-managed list of time-zone pairs and derives a
//! continuously ticking view of both local clocks, their offset difference,
//! and daylight-saving status. Offsets are resolved against the bundled
//! IANA rules database, cached locally, and re-rendered once per second
//! without recomputation.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Local database and data persistence
//! * [`resolver`] - Zone offset and DST resolution
//! * [`service`] - Observable state and the commands that drive it
//! * [`ticker`] - Cancellable periodic task abstraction
//! * [`utils`] - Display formatting helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Zone offset and DST resolution against the IANA rules database
pub mod resolver;

/// Observable application state and commands
pub mod service;

/// Local storage layer for pairs and cached offsets
pub mod storage;

/// Cancellable periodic task abstraction
pub mod ticker;

/// Utility functions for display formatting
pub mod utils;

// Re-export entity models for convenient access
pub use entities::{pair, zone_cache};
pub use service::{HomeState, PairRow, TimeService};
