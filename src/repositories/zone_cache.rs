//! Zone offset cache repository for database operations.

use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::entities::zone_cache;

/// Repository for zone-offset-cache database operations.
pub struct ZoneCacheRepository;

impl ZoneCacheRepository {
    /// Get the cache row for a zone id, if one has been computed.
    pub async fn get<C>(conn: &C, zone_id: &str) -> Result<Option<zone_cache::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(zone_cache::Entity::find_by_id(zone_id).one(conn).await?)
    }

    /// Insert-or-replace the cache row keyed by zone id (last write wins).
    pub async fn upsert<C>(conn: &C, entry: zone_cache::Model) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let active = zone_cache::ActiveModel {
            zone_id: ActiveValue::Set(entry.zone_id),
            offset_minutes: ActiveValue::Set(entry.offset_minutes),
            dst_active: ActiveValue::Set(entry.dst_active),
            last_updated: ActiveValue::Set(entry.last_updated),
        };

        zone_cache::Entity::insert(active)
            .on_conflict(
                OnConflict::column(zone_cache::Column::ZoneId)
                    .update_columns([
                        zone_cache::Column::OffsetMinutes,
                        zone_cache::Column::DstActive,
                        zone_cache::Column::LastUpdated,
                    ])
                    .to_owned(),
            )
            .exec(conn)
            .await?;
        Ok(())
    }
}
