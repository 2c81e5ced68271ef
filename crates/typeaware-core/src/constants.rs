/// TypeAware system version, stamped onto submitted reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of rewrite suggestions attached to a verdict.
pub const MAX_SUGGESTIONS: usize = 3;

/// Safety score of a text with no flagged categories.
pub const MAX_SAFETY_SCORE: u8 = 100;

/// Safety points deducted per flagged category.
pub const SAFETY_PENALTY_PER_CATEGORY: u8 = 25;

/// Upper bound on the compiled size of a single rule regex.
pub const MAX_RULE_REGEX_SIZE: usize = 1 << 20;

/// Storage keys used by the extension state store.
pub mod keys {
    pub const UUID: &str = "uuid";
    pub const STATS: &str = "stats";
    pub const ENABLED: &str = "enabled";
    pub const DETECTIONS: &str = "detections";
    pub const REPORTS: &str = "reports";
}
