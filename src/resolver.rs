//! Zone offset resolution against the bundled IANA rules database.
//!
//! A refresh pass walks every distinct zone referenced by the stored pairs,
//! computes its UTC offset and DST state as of one shared reference
//! instant, and upserts the result into the offset cache. Failures are
//! isolated per zone: an unknown identifier or a failed write is logged and
//! the pass moves on.

use std::collections::BTreeSet;
use std::str::FromStr;

use anyhow::Result;
use chrono::{DateTime, Offset, Utc};
use chrono_tz::{OffsetComponents, Tz};
use log::{debug, info, warn};

use crate::entities::zone_cache;
use crate::storage::PairStore;

/// Error resolving a zone identifier.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The identifier is not a known IANA zone name.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),
}

/// Offset and DST state of one zone at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSnapshot {
    /// Signed minutes ahead of UTC, DST included.
    pub offset_minutes: i32,
    /// Whether daylight-saving rules are in effect at the instant.
    pub dst_active: bool,
}

/// Compute a zone's offset and DST state at the given instant.
pub fn resolve_zone(zone_id: &str, at: DateTime<Utc>) -> Result<ZoneSnapshot, ResolveError> {
    let tz = Tz::from_str(zone_id).map_err(|_| ResolveError::UnknownZone(zone_id.to_string()))?;

    let local = at.with_timezone(&tz);
    let offset = local.offset();
    Ok(ZoneSnapshot {
        offset_minutes: offset.fix().local_minus_utc() / 60,
        dst_active: !offset.dst_offset().is_zero(),
    })
}

/// Recompute and cache offsets for every distinct zone referenced by any
/// stored pair. All zones in one pass share a single reference instant.
///
/// Invalid zone ids and per-zone write failures are logged and skipped;
/// only a failure to list the pairs themselves errors the pass.
pub async fn refresh_all(store: &dyn PairStore) -> Result<()> {
    let pairs = store.list_pairs().await?;
    if pairs.is_empty() {
        debug!("refresh_all() no pairs, skipping");
        return Ok(());
    }

    let zones: BTreeSet<&str> = pairs
        .iter()
        .flat_map(|p| [p.from_zone.as_str(), p.to_zone.as_str()])
        .collect();

    let now = Utc::now();
    let pass_started = now.timestamp_millis();
    info!("🔄 refreshing offsets for {} zone(s)", zones.len());

    for zone in zones {
        let snapshot = match resolve_zone(zone, now) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("refresh_all() skipping zone: {e}");
                continue;
            }
        };

        let entry = zone_cache::Model {
            zone_id: zone.to_string(),
            offset_minutes: snapshot.offset_minutes,
            dst_active: snapshot.dst_active,
            last_updated: pass_started,
        };

        match store.upsert_cache_entry(entry).await {
            Ok(()) => debug!(
                "refresh_all() {zone}: offset={}min dst={}",
                snapshot.offset_minutes, snapshot.dst_active
            ),
            Err(e) => warn!("refresh_all() failed to store {zone}: {e:#}"),
        }
    }

    Ok(())
}
