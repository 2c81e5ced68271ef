//! Named structured events.

/// A bounded log dropped its oldest entries to make room.
pub fn log_evicted(log: &str, evicted: usize, capacity: usize) {
    tracing::debug!(log, evicted, capacity, "bounded log evicted oldest entries");
}

/// Age-based cleanup finished.
pub fn cleanup_completed(detections_removed: usize, reports_removed: usize) {
    tracing::info!(detections_removed, reports_removed, "state cleanup completed");
}

/// A persistence backend call failed.
pub fn storage_failed(operation: &str, key: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(operation, key, error = %error, "state store operation failed");
}

/// A content report was accepted.
pub fn report_submitted(platform: &str, categories: usize) {
    tracing::info!(platform, categories, "content report stored");
}

/// A message could not be decoded or handled.
pub fn message_rejected(reason: &str) {
    tracing::warn!(reason, "rejected extension message");
}
