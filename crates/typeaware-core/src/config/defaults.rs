//! Default values for every configuration knob. The detection thresholds
//! carry over the values the browser extension shipped with.

// Detection gates
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 3;
pub const DEFAULT_INPUT_MIN_LENGTH: usize = 10;

// Sentiment heuristic
pub const DEFAULT_SENTIMENT_SCORE_THRESHOLD: f64 = -0.5;
pub const DEFAULT_SENTIMENT_MAGNITUDE_THRESHOLD: f64 = 0.6;

// Generic heuristics
pub const DEFAULT_CAPS_RATIO_THRESHOLD: f64 = 0.7;
pub const DEFAULT_CAPS_MIN_LENGTH: usize = 10;
pub const DEFAULT_CAPS_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_REPEAT_RUN_LENGTH: usize = 5;
pub const DEFAULT_REPEAT_CONFIDENCE: f64 = 0.5;

// Platform heuristics
pub const DEFAULT_TWITTER_WEIGHT: f64 = 0.7;
pub const DEFAULT_YOUTUBE_WEIGHT: f64 = 0.5;
pub const DEFAULT_YOUTUBE_MAX_LENGTH: usize = 20;
pub const DEFAULT_REDDIT_WEIGHT: f64 = 0.6;

// Severity buckets
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 0.95;
pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.8;
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 0.6;

// Retention
pub const DEFAULT_MAX_DETECTIONS: usize = 50;
pub const DEFAULT_MAX_REPORTS: usize = 100;
pub const DEFAULT_MAX_AGE_DAYS: i64 = 7;
/// Upper bound accepted for `max_age_days`.
pub const MAX_RETENTION_DAYS: i64 = 3650;
pub const DEFAULT_DETECTION_CONTENT_LIMIT: usize = 200;
pub const DEFAULT_REPORT_CONTENT_LIMIT: usize = 500;
pub const DEFAULT_CLEANUP_INTERVAL_MINUTES: u64 = 60;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
