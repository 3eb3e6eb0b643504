use chrono::{TimeZone, Utc};
use zoneglance::resolver::{refresh_all, resolve_zone, ResolveError};
use zoneglance::storage::{LocalStorage, PairStore};

#[test]
fn test_resolve_zone_without_dst() {
    // India observes no DST; the offset is the same year-round.
    let at = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
    let snapshot = resolve_zone("Asia/Kolkata", at).unwrap();
    assert_eq!(snapshot.offset_minutes, 330);
    assert!(!snapshot.dst_active);
}

#[test]
fn test_resolve_zone_summer_dst() {
    let at = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();

    let london = resolve_zone("Europe/London", at).unwrap();
    assert_eq!(london.offset_minutes, 60);
    assert!(london.dst_active);

    let new_york = resolve_zone("America/New_York", at).unwrap();
    assert_eq!(new_york.offset_minutes, -240);
    assert!(new_york.dst_active);
}

#[test]
fn test_resolve_zone_winter_standard_time() {
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();

    let london = resolve_zone("Europe/London", at).unwrap();
    assert_eq!(london.offset_minutes, 0);
    assert!(!london.dst_active);

    let new_york = resolve_zone("America/New_York", at).unwrap();
    assert_eq!(new_york.offset_minutes, -300);
    assert!(!new_york.dst_active);
}

#[test]
fn test_resolve_zone_unknown_id() {
    let at = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
    let err = resolve_zone("Nowhere/Invalid", at).unwrap_err();
    assert!(matches!(err, ResolveError::UnknownZone(ref z) if z == "Nowhere/Invalid"));
}

#[tokio::test]
async fn test_refresh_all_caches_every_referenced_zone() {
    let storage = LocalStorage::new(true).await.unwrap();
    storage.insert_pair("Asia/Kolkata", "Europe/London").await.unwrap();
    storage.insert_pair("Europe/London", "America/New_York").await.unwrap();

    let pass_started = Utc::now().timestamp_millis();
    refresh_all(&storage).await.unwrap();

    for zone in ["Asia/Kolkata", "Europe/London", "America/New_York"] {
        let entry = storage.get_cache_entry(zone).await.unwrap().unwrap();
        assert_eq!(entry.zone_id, zone);
        assert!(entry.last_updated >= pass_started);
    }
}

#[tokio::test]
async fn test_refresh_all_empty_pair_list_is_noop() {
    let storage = LocalStorage::new(true).await.unwrap();
    refresh_all(&storage).await.unwrap();
    assert!(storage.get_cache_entry("Asia/Kolkata").await.unwrap().is_none());
}

#[tokio::test]
async fn test_refresh_all_isolates_invalid_zones() {
    let storage = LocalStorage::new(true).await.unwrap();
    storage.insert_pair("Nowhere/Invalid", "Asia/Kolkata").await.unwrap();

    // The invalid zone is skipped, the valid one still gets a row, and the
    // pass itself succeeds.
    refresh_all(&storage).await.unwrap();

    assert!(storage.get_cache_entry("Nowhere/Invalid").await.unwrap().is_none());
    let entry = storage.get_cache_entry("Asia/Kolkata").await.unwrap().unwrap();
    assert_eq!(entry.offset_minutes, 330);
}

#[tokio::test]
async fn test_refresh_all_is_idempotent() {
    let storage = LocalStorage::new(true).await.unwrap();
    storage.insert_pair("Asia/Kolkata", "Europe/London").await.unwrap();

    refresh_all(&storage).await.unwrap();
    let first = storage.get_cache_entry("Asia/Kolkata").await.unwrap().unwrap();

    refresh_all(&storage).await.unwrap();
    let second = storage.get_cache_entry("Asia/Kolkata").await.unwrap().unwrap();

    assert_eq!(first.offset_minutes, second.offset_minutes);
    assert_eq!(first.dst_active, second.dst_active);
    assert!(second.last_updated >= first.last_updated);
}
