//! Local storage layer for pairs and the zone offset cache.
//!
//! [`PairStore`] is the persistence seam the rest of the core works
//! against; [`LocalStorage`] is its SQLite-backed implementation. The
//! store is owned by the composition root and injected where needed,
//! with an explicit open/close lifecycle.

pub mod db;

use anyhow::Result;
use async_trait::async_trait;

use crate::entities::{pair, zone_cache};

pub use db::LocalStorage;

/// Persistence operations consumed by the core.
#[async_trait]
pub trait PairStore: Send + Sync {
    /// All stored pairs, in insertion order.
    async fn list_pairs(&self) -> Result<Vec<pair::Model>>;

    /// Insert a new pair and return it with its assigned id.
    async fn insert_pair(&self, from_zone: &str, to_zone: &str) -> Result<pair::Model>;

    /// Change both zone columns of a pair in place, keeping its id.
    /// Inserts a fresh pair when the id no longer exists.
    async fn update_pair(&self, id: i64, from_zone: &str, to_zone: &str) -> Result<()>;

    /// Delete a pair by id.
    async fn delete_pair(&self, id: i64) -> Result<()>;

    /// Look up the cached offset/DST row for a zone id.
    async fn get_cache_entry(&self, zone_id: &str) -> Result<Option<zone_cache::Model>>;

    /// Insert-or-replace a cache row (keyed by zone id, last write wins).
    async fn upsert_cache_entry(&self, entry: zone_cache::Model) -> Result<()>;
}
