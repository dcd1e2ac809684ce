//! Polling watch loop feeding the observer hub.
//!
//! Platform-native change notification is not available everywhere, so
//! the hub is driven by snapshot diffing: each cycle queries the
//! frontmost application and the window/title set, and emits one edge
//! per distinct change. Setup problems degrade to slower polling
//! rather than aborting the host process.

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::catalog::CatalogError;
use crate::platform::SourceQuery;

use super::hub::SourceObserver;
use super::types::SourceEvent;

/// Watch loop tuning.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Delay between poll cycles.
    pub interval: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(250),
        }
    }
}

/// Snapshot-diffing poll step, separate from the timer so tests can
/// drive cycles directly.
pub struct SourceWatcher {
    last_frontmost: Option<u32>,
    last_titles: BTreeMap<(u32, u32), Option<String>>,
    primed: bool,
}

impl SourceWatcher {
    pub fn new() -> Self {
        Self {
            last_frontmost: None,
            last_titles: BTreeMap::new(),
            primed: false,
        }
    }

    /// Run one poll cycle: query the platform, diff against the last
    /// snapshot, and broadcast at most one edge per event kind.
    ///
    /// The first cycle only primes the baseline - startup state is not
    /// a change, and firing for it would be a spurious delivery.
    pub fn observe(
        &mut self,
        query: &dyn SourceQuery,
        observer: &SourceObserver,
    ) -> Result<(), CatalogError> {
        let frontmost = query.frontmost_application()?.map(|app| app.process_id);
        let titles: BTreeMap<(u32, u32), Option<String>> = query
            .enumerate_windows()?
            .into_iter()
            .map(|w| (w.identity(), w.title))
            .collect();

        let focus_changed = frontmost != self.last_frontmost;
        let titles_changed = titles != self.last_titles;

        self.last_frontmost = frontmost;
        self.last_titles = titles;

        if !self.primed {
            self.primed = true;
            debug!(event = "core.observer.watch_primed");
            return Ok(());
        }

        if focus_changed {
            debug!(event = "core.observer.focus_edge", frontmost_pid = ?frontmost);
            observer.broadcast(SourceEvent::FocusChanged);
        }
        if titles_changed {
            debug!(event = "core.observer.titles_edge");
            observer.broadcast(SourceEvent::TitlesChanged);
        }

        Ok(())
    }
}

impl Default for SourceWatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive the watch loop until `shutdown` flips to true.
///
/// Query failures are transient by contract: they are logged and the
/// next tick retries. Permission loss is also survivable - the user
/// can re-grant access while the loop keeps running.
pub async fn run_watch_loop<Q: SourceQuery>(
    query: Q,
    observer: SourceObserver,
    config: WatchConfig,
    mut shutdown: watch::Receiver<bool>,
) {
    info!(
        event = "core.observer.watch_started",
        interval_ms = config.interval.as_millis() as u64
    );

    let mut watcher = SourceWatcher::new();
    let mut ticker = tokio::time::interval(config.interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = watcher.observe(&query, &observer) {
                    match e {
                        CatalogError::PermissionDenied => {
                            warn!(event = "core.observer.watch_permission_denied");
                        }
                        CatalogError::QueryFailed { message } => {
                            warn!(event = "core.observer.watch_query_failed", error = %message);
                        }
                    }
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!(event = "core.observer.watch_stopped");
}
