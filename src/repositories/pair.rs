//! Pair repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, QueryOrder};

use crate::entities::pair;

/// Repository for zone-pair database operations.
pub struct PairRepository;

impl PairRepository {
    /// Get all pairs in insertion order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<pair::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(pair::Entity::find()
            .order_by_asc(pair::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single pair by id.
    pub async fn get_by_id<C>(conn: &C, id: i64) -> Result<Option<pair::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(pair::Entity::find_by_id(id).one(conn).await?)
    }

    /// Insert a new pair and return it with its assigned id.
    pub async fn insert<C>(conn: &C, from_zone: &str, to_zone: &str) -> Result<pair::Model>
    where
        C: ConnectionTrait,
    {
        let pair = pair::ActiveModel {
            id: ActiveValue::NotSet,
            from_zone: ActiveValue::Set(from_zone.to_string()),
            to_zone: ActiveValue::Set(to_zone.to_string()),
        };
        Ok(pair.insert(conn).await?)
    }

    /// Update both zone columns of an existing pair, keeping its id.
    /// Returns `None` when no row with that id exists.
    pub async fn update_zones<C>(
        conn: &C,
        id: i64,
        from_zone: &str,
        to_zone: &str,
    ) -> Result<Option<pair::Model>>
    where
        C: ConnectionTrait,
    {
        let Some(existing) = Self::get_by_id(conn, id).await? else {
            return Ok(None);
        };
        let mut active: pair::ActiveModel = existing.into();
        active.from_zone = ActiveValue::Set(from_zone.to_string());
        active.to_zone = ActiveValue::Set(to_zone.to_string());
        Ok(Some(active.update(conn).await?))
    }

    /// Delete a pair by id. Deleting a missing id is a no-op.
    pub async fn delete<C>(conn: &C, id: i64) -> Result<()>
    where
        C: ConnectionTrait,
    {
        pair::Entity::delete_by_id(id).exec(conn).await?;
        Ok(())
    }
}
