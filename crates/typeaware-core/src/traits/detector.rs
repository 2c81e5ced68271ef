use crate::models::{ScanContext, ScanMode, Verdict};

/// Content detection. Implementations must be pure: the same input always
/// produces the same verdict and nothing is retained between calls.
pub trait IDetector: Send + Sync {
    /// Scan raw text, optionally with platform context. Never fails.
    fn scan(&self, text: &str, context: Option<&ScanContext>) -> Verdict;

    /// Scan the raw text, its normalized form, or both.
    fn scan_with_mode(&self, text: &str, context: Option<&ScanContext>, mode: ScanMode)
        -> Verdict;
}
