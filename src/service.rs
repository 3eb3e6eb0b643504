//! Observable application state and the commands that drive it.
//!
//! [`TimeService`] owns the single shared [`HomeState`] value. Every
//! mutation reads the current state, computes the next one, and publishes
//! it as one atomic replace through a watch channel, so readers always see
//! a complete snapshot. Commands never return errors; failures land in the
//! state's `error` field.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use log::{debug, error, info};
use serde::Serialize;
use tokio::sync::watch;

use crate::entities::{pair, zone_cache};
use crate::resolver;
use crate::storage::PairStore;
use crate::ticker::Ticker;
use crate::utils::datetime;

/// Rendered view of one zone pair, re-derived every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairRow {
    pub id: i64,
    pub from_zone: String,
    pub to_zone: String,
    pub from_time: String,
    pub to_time: String,
    pub diff_text: String,
    pub dst_text: String,
}

/// The one observable state value consumed by front-ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomeState {
    pub is_loading: bool,
    pub pairs: Vec<PairRow>,
    pub error: Option<String>,
}

#[derive(Default)]
struct TickerSlots {
    render: Option<Ticker>,
    refresh: Option<Ticker>,
}

/// Coordinates storage, the offset resolver, and the render tickers behind
/// one observable state value.
#[derive(Clone)]
pub struct TimeService {
    store: Arc<dyn PairStore>,
    state: Arc<watch::Sender<HomeState>>,
    tickers: Arc<Mutex<TickerSlots>>,
    tick_interval: Duration,
}

impl TimeService {
    pub fn new(store: Arc<dyn PairStore>, tick_interval: Duration) -> Self {
        let (tx, _rx) = watch::channel(HomeState::default());
        Self {
            store,
            state: Arc::new(tx),
            tickers: Arc::new(Mutex::new(TickerSlots::default())),
            tick_interval,
        }
    }

    /// Subscribe to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.state.subscribe()
    }

    /// The current state snapshot.
    pub fn state(&self) -> HomeState {
        self.state.borrow().clone()
    }

    /// Read the stored pairs and publish them rendered against the current
    /// cache.
    pub async fn load(&self) {
        debug!("load() called");
        self.state.send_modify(|s| s.is_loading = true);
        self.publish(self.build_rows().await);
    }

    /// Recompute offsets for every referenced zone, then reload.
    pub async fn refresh_all(&self) {
        debug!("refresh_all() called");
        self.state.send_modify(|s| s.is_loading = true);
        let rows = match resolver::refresh_all(self.store.as_ref()).await {
            Ok(()) => self.build_rows().await,
            Err(e) => Err(e),
        };
        self.publish(rows);
    }

    /// Store a new pair, resolve any newly-referenced zones, and reload.
    pub async fn add_pair(&self, from_zone: &str, to_zone: &str) {
        debug!("add_pair() from={from_zone} to={to_zone}");
        let outcome = async {
            self.store.insert_pair(from_zone, to_zone).await?;
            resolver::refresh_all(self.store.as_ref()).await
        }
        .await;

        match outcome {
            Ok(()) => self.load().await,
            Err(e) => self.publish_error("add_pair", &e),
        }
    }

    /// Change a pair's zones in place (the id is preserved), resolve any
    /// newly-referenced zones, and reload.
    pub async fn edit_pair(&self, id: i64, from_zone: &str, to_zone: &str) {
        debug!("edit_pair() id={id} from={from_zone} to={to_zone}");
        let outcome = async {
            self.store.update_pair(id, from_zone, to_zone).await?;
            resolver::refresh_all(self.store.as_ref()).await
        }
        .await;

        match outcome {
            Ok(()) => self.load().await,
            Err(e) => self.publish_error("edit_pair", &e),
        }
    }

    /// Delete a pair and reload. Cache rows for zones no longer referenced
    /// are left behind to age out.
    pub async fn delete_pair(&self, id: i64) {
        debug!("delete_pair() id={id}");
        match self.store.delete_pair(id).await {
            Ok(()) => self.load().await,
            Err(e) => self.publish_error("delete_pair", &e),
        }
    }

    /// Move a displayed pair from one list position to another. Indices are
    /// clamped to the list bounds; equal indices after clamping are a no-op.
    /// Ordering lives only in the published state and resets on reload.
    pub fn move_pair(&self, from_index: usize, to_index: usize) {
        self.state.send_modify(|s| {
            if s.pairs.is_empty() {
                return;
            }
            let last = s.pairs.len() - 1;
            let from = from_index.min(last);
            let to = to_index.min(last);
            if from == to {
                return;
            }
            debug!("move_pair() {from} -> {to}");
            let row = s.pairs.remove(from);
            s.pairs.insert(to, row);
        });
    }

    /// Begin the periodic render cycle. Returns `false` (and changes
    /// nothing) when a cycle is already running. The cycle stops when the
    /// service is dropped.
    pub fn start_ticker(&self) -> bool {
        let Ok(mut slots) = self.tickers.lock() else {
            return false;
        };
        if slots.render.is_some() {
            debug!("start_ticker() already running");
            return false;
        }

        info!("starting render ticker, period {}ms", self.tick_interval.as_millis());
        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);
        slots.render = Some(Ticker::spawn(self.tick_interval, move || {
            let store = Arc::clone(&store);
            let state = Arc::clone(&state);
            async move { tick_once(store.as_ref(), &state).await }
        }));
        true
    }

    /// Begin periodically re-running the offset resolver, so cached offsets
    /// track DST transitions while the app stays open. Idempotent like
    /// [`Self::start_ticker`].
    pub fn start_auto_refresh(&self, interval: Duration) -> bool {
        let Ok(mut slots) = self.tickers.lock() else {
            return false;
        };
        if slots.refresh.is_some() {
            debug!("start_auto_refresh() already running");
            return false;
        }

        info!("starting auto-refresh, period {}s", interval.as_secs());
        let store = Arc::clone(&self.store);
        slots.refresh = Some(Ticker::spawn(interval, move || {
            let store = Arc::clone(&store);
            async move { resolver::refresh_all(store.as_ref()).await }
        }));
        true
    }

    /// Whether the render cycle is currently running.
    pub fn is_ticker_running(&self) -> bool {
        self.tickers
            .lock()
            .map(|slots| slots.render.as_ref().is_some_and(|t| !t.is_finished()))
            .unwrap_or(false)
    }

    fn publish(&self, rows: Result<Vec<PairRow>>) {
        match rows {
            Ok(pairs) => {
                info!("✅ published {} pair(s)", pairs.len());
                self.state.send_replace(HomeState {
                    is_loading: false,
                    pairs,
                    error: None,
                });
            }
            Err(e) => {
                error!("❌ load failed: {e:#}");
                self.state.send_replace(HomeState {
                    is_loading: false,
                    pairs: Vec::new(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    fn publish_error(&self, command: &str, e: &anyhow::Error) {
        error!("❌ {command} failed: {e:#}");
        let message = e.to_string();
        self.state.send_modify(|s| {
            s.is_loading = false;
            s.error = Some(message);
        });
    }

    async fn build_rows(&self) -> Result<Vec<PairRow>> {
        let now_ms = Utc::now().timestamp_millis();
        let pairs = self.store.list_pairs().await?;

        let mut rows = Vec::with_capacity(pairs.len());
        for p in pairs {
            let from_cache = self.store.get_cache_entry(&p.from_zone).await?;
            let to_cache = self.store.get_cache_entry(&p.to_zone).await?;
            rows.push(render_row(&p, now_ms, from_cache.as_ref(), to_cache.as_ref()));
        }
        Ok(rows)
    }
}

fn render_row(
    p: &pair::Model,
    now_ms: i64,
    from: Option<&zone_cache::Model>,
    to: Option<&zone_cache::Model>,
) -> PairRow {
    let from_offset = from.map(|c| c.offset_minutes);
    let to_offset = to.map(|c| c.offset_minutes);
    PairRow {
        id: p.id,
        from_zone: p.from_zone.clone(),
        to_zone: p.to_zone.clone(),
        from_time: datetime::format_clock(now_ms, from_offset),
        to_time: datetime::format_clock(now_ms, to_offset),
        diff_text: datetime::difference_text(from_offset, to_offset),
        dst_text: datetime::dst_text(from.map(|c| c.dst_active), to.map(|c| c.dst_active)),
    }
}

/// One render pass: re-derive every displayed pair's strings from the cache
/// at a single wall-clock instant and publish them as one state update.
async fn tick_once(store: &dyn PairStore, state: &watch::Sender<HomeState>) -> Result<()> {
    let now_ms = Utc::now().timestamp_millis();
    let current: Vec<PairRow> = state.borrow().pairs.clone();
    if current.is_empty() {
        return Ok(());
    }

    let mut refreshed = Vec::with_capacity(current.len());
    for row in current {
        let from_cache = store.get_cache_entry(&row.from_zone).await?;
        let to_cache = store.get_cache_entry(&row.to_zone).await?;
        let from_offset = from_cache.as_ref().map(|c| c.offset_minutes);
        let to_offset = to_cache.as_ref().map(|c| c.offset_minutes);

        refreshed.push(PairRow {
            from_time: datetime::format_clock(now_ms, from_offset),
            to_time: datetime::format_clock(now_ms, to_offset),
            diff_text: datetime::difference_text(from_offset, to_offset),
            dst_text: datetime::dst_text(
                from_cache.as_ref().map(|c| c.dst_active),
                to_cache.as_ref().map(|c| c.dst_active),
            ),
            ..row
        });
    }

    state.send_modify(|s| s.pairs = refreshed);
    Ok(())
}
