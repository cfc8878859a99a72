//! Periodic polling driver for the history store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info};

use crate::clipboard::store::ClipboardHistoryStore;

/// Default pasteboard polling cadence
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Cancellable handle for a scheduled repeating tick.
pub trait ScheduleHandle: Send + Sync {
    fn cancel(&self);
}

/// Scheduler abstraction: run a callback every fixed interval until the
/// returned handle is cancelled. Keeps the store free of any event-loop
/// dependency so tests drive `poll` directly.
pub trait Scheduler {
    fn repeat(&self, interval: Duration, tick: Box<dyn Fn() + Send + Sync>)
        -> Box<dyn ScheduleHandle>;
}

/// Tokio-backed scheduler: one spawned task per repeating tick.
pub struct TokioScheduler;

struct TokioHandle {
    cancelled: Arc<AtomicBool>,
}

impl ScheduleHandle for TokioHandle {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl Scheduler for TokioScheduler {
    fn repeat(
        &self,
        interval: Duration,
        tick: Box<dyn Fn() + Send + Sync>,
    ) -> Box<dyn ScheduleHandle> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                tick();
            }
        });
        Box::new(TokioHandle { cancelled })
    }
}

/// Polls the store on a fixed cadence. Monitoring can be paused with the
/// enabled flag without tearing the schedule down, or stopped outright.
pub struct ClipboardMonitor {
    store: ClipboardHistoryStore,
    enabled: Arc<AtomicBool>,
    handle: Mutex<Option<Box<dyn ScheduleHandle>>>,
}

impl ClipboardMonitor {
    pub fn new(store: ClipboardHistoryStore) -> Self {
        Self {
            store,
            enabled: Arc::new(AtomicBool::new(true)),
            handle: Mutex::new(None),
        }
    }

    /// Start polling on `scheduler` at `interval`. Replaces and cancels any
    /// previous schedule.
    pub fn start(&self, scheduler: &dyn Scheduler, interval: Duration) {
        let store = self.store.clone_arc();
        let enabled = Arc::clone(&self.enabled);
        let handle = scheduler.repeat(
            interval,
            Box::new(move || {
                if enabled.load(Ordering::SeqCst) {
                    store.poll();
                }
            }),
        );
        let mut slot = match self.handle.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = slot.replace(handle) {
            previous.cancel();
        }
        info!("clipboard monitoring started");
    }

    /// Cancel the schedule entirely.
    pub fn stop(&self) {
        let mut slot = match self.handle.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(handle) = slot.take() {
            handle.cancel();
            info!("clipboard monitoring stopped");
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
        debug!("monitor enabled");
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
        debug!("monitor disabled");
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Flip the enabled flag, returning the new state.
    pub fn toggle(&self) -> bool {
        let new_state = !self.enabled.fetch_xor(true, Ordering::SeqCst);
        debug!(enabled = new_state, "monitor toggled");
        new_state
    }
}
