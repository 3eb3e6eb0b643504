use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use super::PairStore;
use crate::constants::{APP_DIR_NAME, DB_FILE_NAME};
use crate::entities::{pair, zone_cache};
use crate::repositories::{PairRepository, ZoneCacheRepository};

// Distinguishes concurrently-open in-memory databases within one process.
static MEMDB_SEQ: AtomicU64 = AtomicU64::new(0);

/// SQLite-backed storage for pairs and the zone offset cache.
pub struct LocalStorage {
    conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the storage. `in_memory` uses a throwaway database, otherwise
    /// the database file lives in the platform data directory.
    pub async fn new(in_memory: bool) -> Result<Self> {
        if in_memory {
            // A shared-cache named database survives as long as the pool
            // keeps its floor connection open.
            let seq = MEMDB_SEQ.fetch_add(1, Ordering::Relaxed);
            Self::connect(format!(
                "sqlite:file:zoneglance_memdb_{seq}?mode=memory&cache=shared"
            ))
            .await
        } else {
            Self::open(Self::default_db_path()?).await
        }
    }

    /// Open (or create) the database at a specific path.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }
        Self::connect(format!("sqlite://{}?mode=rwc", path.display())).await
    }

    async fn connect(url: String) -> Result<Self> {
        let mut options = ConnectOptions::new(url.as_str());
        options.min_connections(1).max_connections(4);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {url}"))?;
        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Create the tables on first open.
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut pairs_table = schema.create_table_from_entity(pair::Entity);
        self.conn.execute(backend.build(pairs_table.if_not_exists())).await?;

        let mut cache_table = schema.create_table_from_entity(zone_cache::Entity);
        self.conn.execute(backend.build(cache_table.if_not_exists())).await?;

        debug!("database schema ready");
        Ok(())
    }

    /// Close the underlying connection. Call once at shutdown.
    pub async fn close(&self) -> Result<()> {
        self.conn.close_by_ref().await?;
        Ok(())
    }

    fn default_db_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(DB_FILE_NAME))
    }
}

#[async_trait]
impl PairStore for LocalStorage {
    async fn list_pairs(&self) -> Result<Vec<pair::Model>> {
        PairRepository::get_all(&self.conn).await
    }

    async fn insert_pair(&self, from_zone: &str, to_zone: &str) -> Result<pair::Model> {
        let inserted = PairRepository::insert(&self.conn, from_zone, to_zone).await?;
        debug!("inserted pair id={} {} -> {}", inserted.id, from_zone, to_zone);
        Ok(inserted)
    }

    async fn update_pair(&self, id: i64, from_zone: &str, to_zone: &str) -> Result<()> {
        match PairRepository::update_zones(&self.conn, id, from_zone, to_zone).await? {
            Some(_) => debug!("updated pair id={id} {from_zone} -> {to_zone}"),
            None => {
                // Edited row vanished underneath us; keep the edit by inserting.
                info!("no pair with id={id}, inserting instead");
                PairRepository::insert(&self.conn, from_zone, to_zone).await?;
            }
        }
        Ok(())
    }

    async fn delete_pair(&self, id: i64) -> Result<()> {
        PairRepository::delete(&self.conn, id).await?;
        debug!("deleted pair id={id}");
        Ok(())
    }

    async fn get_cache_entry(&self, zone_id: &str) -> Result<Option<zone_cache::Model>> {
        ZoneCacheRepository::get(&self.conn, zone_id).await
    }

    async fn upsert_cache_entry(&self, entry: zone_cache::Model) -> Result<()> {
        ZoneCacheRepository::upsert(&self.conn, entry).await
    }
}
