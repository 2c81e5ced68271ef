use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, TypeAwareResult};

/// Retention policy for the extension state store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Stored detections kept before the oldest is evicted.
    pub max_detections: usize,
    /// Stored reports kept before the oldest is evicted.
    pub max_reports: usize,
    /// Entries older than this are dropped by cleanup.
    pub max_age_days: i64,
    /// Characters of content kept on a stored detection.
    pub detection_content_limit: usize,
    /// Characters of content kept on a submitted report.
    pub report_content_limit: usize,
    /// How often the host should invoke cleanup.
    pub cleanup_interval_minutes: u64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            max_detections: defaults::DEFAULT_MAX_DETECTIONS,
            max_reports: defaults::DEFAULT_MAX_REPORTS,
            max_age_days: defaults::DEFAULT_MAX_AGE_DAYS,
            detection_content_limit: defaults::DEFAULT_DETECTION_CONTENT_LIMIT,
            report_content_limit: defaults::DEFAULT_REPORT_CONTENT_LIMIT,
            cleanup_interval_minutes: defaults::DEFAULT_CLEANUP_INTERVAL_MINUTES,
        }
    }
}

impl RetentionConfig {
    pub fn validate(&self) -> TypeAwareResult<()> {
        if self.max_detections == 0 || self.max_reports == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retention capacity".to_string(),
                reason: "log capacities must be at least 1".to_string(),
            }
            .into());
        }
        if self.max_age_days <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_age_days".to_string(),
                reason: format!("{} is not a positive number of days", self.max_age_days),
            }
            .into());
        }
        if self.max_age_days > defaults::MAX_RETENTION_DAYS {
            return Err(ConfigError::InvalidValue {
                field: "max_age_days".to_string(),
                reason: format!(
                    "{} exceeds the limit of {} days",
                    self.max_age_days,
                    defaults::MAX_RETENTION_DAYS
                ),
            }
            .into());
        }
        Ok(())
    }
}
