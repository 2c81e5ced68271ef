//! Periodic retention cleanup.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use typeaware_core::errors::{StorageError, TypeAwareResult};
use typeaware_core::traits::IKeyValueStore;
use typeaware_state::{CleanupSummary, StateStore};

/// Runs `StateStore::cleanup` at most once per
/// `retention.cleanup_interval_minutes`. The host calls `tick` from whatever
/// timer it has.
pub struct CleanupScheduler<S> {
    state: Arc<StateStore<S>>,
    interval: Duration,
    last_run: Mutex<Option<DateTime<Utc>>>,
}

impl<S: IKeyValueStore> CleanupScheduler<S> {
    pub fn new(state: Arc<StateStore<S>>) -> Self {
        let minutes = i64::try_from(state.retention().cleanup_interval_minutes).unwrap_or(i64::MAX);
        Self {
            interval: Duration::try_minutes(minutes).unwrap_or(Duration::MAX),
            state,
            last_run: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_run(&self) -> Option<DateTime<Utc>> {
        self.last_run.lock().ok().and_then(|guard| *guard)
    }

    /// Whether a cleanup is due at `now`. The first tick is always due.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.last_run() {
            Some(last) => now - last >= self.interval,
            None => true,
        }
    }

    /// Run cleanup if due. Returns `None` when the interval has not elapsed.
    pub fn tick(&self, now: DateTime<Utc>) -> TypeAwareResult<Option<CleanupSummary>> {
        let mut last_run = self.last_run.lock().map_err(|_| StorageError::Backend {
            message: "cleanup scheduler lock poisoned".to_string(),
        })?;
        if let Some(last) = *last_run {
            if now - last < self.interval {
                return Ok(None);
            }
        }

        let summary = self.state.cleanup(now)?;
        *last_run = Some(now);
        Ok(Some(summary))
    }
}
