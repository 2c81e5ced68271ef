use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use typeaware_core::{Category, Platform, Severity, Verdict};
use uuid::Uuid;

/// Lifetime counters shown in the extension popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ExtensionStats {
    pub total_scanned: u64,
    pub threats_detected: u64,
    pub reports_submitted: u64,
}

/// Increments to apply to `ExtensionStats`. Missing fields count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct StatsDelta {
    pub total_scanned: u64,
    pub threats_detected: u64,
    pub reports_submitted: u64,
}

impl StatsDelta {
    pub fn scanned() -> Self {
        Self {
            total_scanned: 1,
            ..Self::default()
        }
    }

    pub fn threat() -> Self {
        Self {
            threats_detected: 1,
            ..Self::default()
        }
    }

    pub fn report() -> Self {
        Self {
            reports_submitted: 1,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ExtensionStats {
    pub fn apply(&mut self, delta: StatsDelta) {
        self.total_scanned = self.total_scanned.saturating_add(delta.total_scanned);
        self.threats_detected = self.threats_detected.saturating_add(delta.threats_detected);
        self.reports_submitted = self.reports_submitted.saturating_add(delta.reports_submitted);
    }
}

/// A stored detection, kept for the popup's recent-activity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DetectionRecord {
    pub categories: Vec<Category>,
    pub confidence: f64,
    pub severity: Severity,
    pub matches: Vec<String>,
    /// Leading characters of the flagged text.
    pub content: String,
    /// blake3 of the full flagged text, so repeats can be grouped.
    pub content_hash: String,
    pub platform: Platform,
    pub url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl DetectionRecord {
    pub fn from_verdict(
        verdict: &Verdict,
        content: &str,
        platform: Platform,
        url: Option<String>,
        timestamp: DateTime<Utc>,
        content_limit: usize,
    ) -> Self {
        Self {
            categories: verdict.categories.iter().copied().collect(),
            confidence: verdict.confidence.value(),
            severity: verdict.severity,
            matches: verdict.matches.clone(),
            content: truncate_chars(content, content_limit),
            content_hash: content_hash(content),
            platform,
            url,
            timestamp,
        }
    }
}

/// A report as submitted by the page, before the store stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewReport {
    pub content: String,
    #[serde(alias = "types")]
    pub categories: Vec<Category>,
    pub confidence: f64,
    pub platform: Platform,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl NewReport {
    pub fn from_verdict(verdict: &Verdict, content: &str, platform: Platform) -> Self {
        Self {
            content: content.to_string(),
            categories: verdict.categories.iter().copied().collect(),
            confidence: verdict.confidence.value(),
            platform,
            url: None,
            user_agent: None,
        }
    }
}

/// A stored report, stamped with the install UUID and extension version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportRecord {
    pub content: String,
    pub content_hash: String,
    pub categories: Vec<Category>,
    pub confidence: f64,
    pub platform: Platform,
    pub url: Option<String>,
    pub user_agent: Option<String>,
    #[serde(rename = "userUUID")]
    pub user_uuid: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
    pub extension_version: String,
}

/// First `limit` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

pub fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}
