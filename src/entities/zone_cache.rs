use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per distinct zone id. `offset_minutes` already includes any DST
/// shift; `last_updated` is the wall-clock epoch-ms of the refresh pass that
/// wrote the row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "zone_cache")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub zone_id: String,
    pub offset_minutes: i32,
    pub dst_active: bool,
    pub last_updated: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
