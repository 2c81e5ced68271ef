use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use typeaware_core::config::RetentionConfig;
use typeaware_core::constants::{keys, VERSION};
use typeaware_core::errors::{StorageError, TypeAwareResult};
use typeaware_core::traits::IKeyValueStore;
use typeaware_observability::store_span;
use typeaware_observability::tracing_setup::events;
use uuid::Uuid;

use crate::bounded_log::BoundedLog;
use crate::records::{
    content_hash, truncate_chars, DetectionRecord, ExtensionStats, NewReport, ReportRecord,
    StatsDelta,
};

/// What a cleanup pass removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanupSummary {
    pub detections_removed: usize,
    pub reports_removed: usize,
}

/// Extension state over an injected key-value backend.
///
/// Read-modify-write sequences are serialized through an internal lock, so
/// one store can be shared between the page scanner and the message router.
pub struct StateStore<S> {
    backend: S,
    retention: RetentionConfig,
    write_lock: Mutex<()>,
}

impl<S: IKeyValueStore> StateStore<S> {
    pub fn new(backend: S, retention: RetentionConfig) -> Self {
        Self {
            backend,
            retention,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn retention(&self) -> &RetentionConfig {
        &self.retention
    }

    /// Seed install-time defaults: a fresh UUID, zeroed stats, and the
    /// enabled flag. Existing values are left untouched.
    pub fn initialize(&self) -> TypeAwareResult<Uuid> {
        let _span = store_span!("initialize").entered();
        let _guard = self.lock()?;

        let uuid = match self.load::<Uuid>(keys::UUID)? {
            Some(uuid) => uuid,
            None => {
                let uuid = Uuid::new_v4();
                self.save(keys::UUID, &uuid)?;
                tracing::info!(%uuid, "generated install id");
                uuid
            }
        };
        if self.load::<ExtensionStats>(keys::STATS)?.is_none() {
            self.save(keys::STATS, &ExtensionStats::default())?;
        }
        if self.load::<bool>(keys::ENABLED)?.is_none() {
            self.save(keys::ENABLED, &true)?;
        }
        Ok(uuid)
    }

    pub fn uuid(&self) -> TypeAwareResult<Option<Uuid>> {
        self.load(keys::UUID)
    }

    pub fn stats(&self) -> TypeAwareResult<ExtensionStats> {
        Ok(self.load(keys::STATS)?.unwrap_or_default())
    }

    /// Add `delta` to the stored counters and return the new totals.
    pub fn apply_stats_delta(&self, delta: StatsDelta) -> TypeAwareResult<ExtensionStats> {
        let _guard = self.lock()?;
        self.apply_stats_locked(delta)
    }

    /// Detection is on unless explicitly switched off.
    pub fn is_enabled(&self) -> TypeAwareResult<bool> {
        Ok(self.load(keys::ENABLED)?.unwrap_or(true))
    }

    pub fn set_enabled(&self, enabled: bool) -> TypeAwareResult<()> {
        let _guard = self.lock()?;
        self.save(keys::ENABLED, &enabled)
    }

    /// Append a detection, evicting the oldest beyond `max_detections`.
    pub fn record_detection(&self, record: DetectionRecord) -> TypeAwareResult<()> {
        let _span = store_span!("record_detection").entered();
        let _guard = self.lock()?;

        let mut log = self.load_log::<DetectionRecord>(keys::DETECTIONS, self.retention.max_detections)?;
        if log.push(record).is_some() {
            events::log_evicted(keys::DETECTIONS, 1, log.capacity());
        }
        self.save(keys::DETECTIONS, &log.into_vec())
    }

    /// Stored detections, oldest first.
    pub fn detections(&self) -> TypeAwareResult<Vec<DetectionRecord>> {
        Ok(self
            .load_log(keys::DETECTIONS, self.retention.max_detections)?
            .into_vec())
    }

    /// Stamp and store a report, then bump `reports_submitted`.
    pub fn submit_report(
        &self,
        report: NewReport,
        now: DateTime<Utc>,
    ) -> TypeAwareResult<ReportRecord> {
        let _span = store_span!("submit_report").entered();
        let _guard = self.lock()?;

        let record = ReportRecord {
            content_hash: content_hash(&report.content),
            content: truncate_chars(&report.content, self.retention.report_content_limit),
            categories: report.categories,
            confidence: report.confidence,
            platform: report.platform,
            url: report.url,
            user_agent: report.user_agent,
            user_uuid: self.load(keys::UUID)?,
            timestamp: now,
            extension_version: VERSION.to_string(),
        };

        let mut log = self.load_log::<ReportRecord>(keys::REPORTS, self.retention.max_reports)?;
        if log.push(record.clone()).is_some() {
            events::log_evicted(keys::REPORTS, 1, log.capacity());
        }
        self.save(keys::REPORTS, &log.into_vec())?;
        self.apply_stats_locked(StatsDelta::report())?;

        events::report_submitted(record.platform.as_str(), record.categories.len());
        Ok(record)
    }

    /// Stored reports, oldest first.
    pub fn reports(&self) -> TypeAwareResult<Vec<ReportRecord>> {
        Ok(self
            .load_log(keys::REPORTS, self.retention.max_reports)?
            .into_vec())
    }

    /// Drop detections and reports older than `max_age_days` relative to `now`.
    pub fn cleanup(&self, now: DateTime<Utc>) -> TypeAwareResult<CleanupSummary> {
        let _span = store_span!("cleanup").entered();
        let _guard = self.lock()?;
        // A cutoff before the representable range means nothing is old enough.
        let Some(cutoff) = Duration::try_days(self.retention.max_age_days)
            .and_then(|age| now.checked_sub_signed(age))
        else {
            events::cleanup_completed(0, 0);
            return Ok(CleanupSummary::default());
        };

        let mut detections =
            self.load_log::<DetectionRecord>(keys::DETECTIONS, self.retention.max_detections)?;
        let detections_removed = detections.retain(|d| d.timestamp > cutoff);
        if detections_removed > 0 {
            self.save(keys::DETECTIONS, &detections.into_vec())?;
        }

        let mut reports = self.load_log::<ReportRecord>(keys::REPORTS, self.retention.max_reports)?;
        let reports_removed = reports.retain(|r| r.timestamp > cutoff);
        if reports_removed > 0 {
            self.save(keys::REPORTS, &reports.into_vec())?;
        }

        events::cleanup_completed(detections_removed, reports_removed);
        Ok(CleanupSummary {
            detections_removed,
            reports_removed,
        })
    }

    /// Wipe every key from the backend.
    pub fn reset(&self) -> TypeAwareResult<()> {
        let _guard = self.lock()?;
        self.backend.clear()
    }

    fn apply_stats_locked(&self, delta: StatsDelta) -> TypeAwareResult<ExtensionStats> {
        let mut stats: ExtensionStats = self.load(keys::STATS)?.unwrap_or_default();
        stats.apply(delta);
        self.save(keys::STATS, &stats)?;
        Ok(stats)
    }

    fn lock(&self) -> TypeAwareResult<std::sync::MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| {
            StorageError::Backend {
                message: "state store lock poisoned".to_string(),
            }
            .into()
        })
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> TypeAwareResult<Option<T>> {
        let Some(value) = self.backend.get(key).inspect_err(|e| {
            events::storage_failed("get", key, e);
        })?
        else {
            return Ok(None);
        };
        serde_json::from_value(value).map(Some).map_err(|e| {
            StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn load_log<T: DeserializeOwned>(
        &self,
        key: &str,
        capacity: usize,
    ) -> TypeAwareResult<BoundedLog<T>> {
        let items: Vec<T> = self.load(key)?.unwrap_or_default();
        Ok(BoundedLog::from_vec(items, capacity))
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> TypeAwareResult<()> {
        let value = serde_json::to_value(value)?;
        self.backend.set(key, value).inspect_err(|e| {
            events::storage_failed("set", key, e);
        })
    }
}
