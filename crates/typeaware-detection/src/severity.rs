//! Severity buckets. Monotone in confidence for any fixed category set.

use std::collections::BTreeSet;
use typeaware_core::config::DetectionConfig;
use typeaware_core::{Category, Confidence, Severity};

/// Bucket a verdict.
///
/// Threat content or confidence at the high threshold is at least `High`;
/// threats that are themselves high-confidence, or anything at the critical
/// threshold, are `Critical`. Harassment or medium-threshold confidence is at
/// least `Medium`.
pub fn derive(
    confidence: Confidence,
    categories: &BTreeSet<Category>,
    config: &DetectionConfig,
) -> Severity {
    let c = confidence.value();
    let threats = categories.contains(&Category::Threats);

    if c >= config.critical_threshold || (threats && c >= config.high_threshold) {
        Severity::Critical
    } else if c >= config.high_threshold || threats {
        Severity::High
    } else if c >= config.medium_threshold || categories.contains(&Category::Harassment) {
        Severity::Medium
    } else {
        Severity::Low
    }
}
