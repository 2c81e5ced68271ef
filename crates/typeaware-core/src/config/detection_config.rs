use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_SUGGESTIONS;
use crate::errors::{ConfigError, TypeAwareResult};
use crate::models::ScanMode;

/// When the shouting and repeated-character heuristics run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicGate {
    /// Only when no category rule matched, so a rule hit reads the same
    /// whatever its letter case.
    #[default]
    Fallback,
    /// On every scan, OR-ing their categories into the verdict.
    Always,
}

/// Detection engine tuning. Weights and thresholds are plain magic constants
/// inherited from the extension; they live here so callers can override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Trimmed texts shorter than this are never abusive.
    pub min_text_length: usize,
    /// Sentiment score below which text counts as negative.
    pub sentiment_score_threshold: f64,
    /// Fraction of sentiment-bearing tokens required for the negative flag.
    pub sentiment_magnitude_threshold: f64,
    /// Uppercase-letter ratio above which text counts as shouting.
    pub caps_ratio_threshold: f64,
    /// Texts must be longer than this for the caps heuristic to apply.
    pub caps_min_length: usize,
    pub caps_confidence: f64,
    /// Consecutive identical characters that trigger the spam heuristic.
    pub repeat_run_length: usize,
    pub repeat_confidence: f64,
    pub generic_heuristics: HeuristicGate,
    pub twitter_weight: f64,
    pub youtube_weight: f64,
    /// YouTube "first!" comments must be shorter than this.
    pub youtube_max_length: usize,
    pub reddit_weight: f64,
    pub critical_threshold: f64,
    pub high_threshold: f64,
    pub medium_threshold: f64,
    pub max_suggestions: usize,
    /// Live input shorter than this is not scanned.
    pub input_min_length: usize,
    /// Which text variant the engine scans by default.
    pub scan_mode: ScanMode,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_text_length: defaults::DEFAULT_MIN_TEXT_LENGTH,
            sentiment_score_threshold: defaults::DEFAULT_SENTIMENT_SCORE_THRESHOLD,
            sentiment_magnitude_threshold: defaults::DEFAULT_SENTIMENT_MAGNITUDE_THRESHOLD,
            caps_ratio_threshold: defaults::DEFAULT_CAPS_RATIO_THRESHOLD,
            caps_min_length: defaults::DEFAULT_CAPS_MIN_LENGTH,
            caps_confidence: defaults::DEFAULT_CAPS_CONFIDENCE,
            repeat_run_length: defaults::DEFAULT_REPEAT_RUN_LENGTH,
            repeat_confidence: defaults::DEFAULT_REPEAT_CONFIDENCE,
            generic_heuristics: HeuristicGate::Fallback,
            twitter_weight: defaults::DEFAULT_TWITTER_WEIGHT,
            youtube_weight: defaults::DEFAULT_YOUTUBE_WEIGHT,
            youtube_max_length: defaults::DEFAULT_YOUTUBE_MAX_LENGTH,
            reddit_weight: defaults::DEFAULT_REDDIT_WEIGHT,
            critical_threshold: defaults::DEFAULT_CRITICAL_THRESHOLD,
            high_threshold: defaults::DEFAULT_HIGH_THRESHOLD,
            medium_threshold: defaults::DEFAULT_MEDIUM_THRESHOLD,
            max_suggestions: MAX_SUGGESTIONS,
            input_min_length: defaults::DEFAULT_INPUT_MIN_LENGTH,
            scan_mode: ScanMode::Raw,
        }
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> TypeAwareResult<()> {
        let unit_fields = [
            ("sentiment_magnitude_threshold", self.sentiment_magnitude_threshold),
            ("caps_ratio_threshold", self.caps_ratio_threshold),
            ("caps_confidence", self.caps_confidence),
            ("repeat_confidence", self.repeat_confidence),
            ("twitter_weight", self.twitter_weight),
            ("youtube_weight", self.youtube_weight),
            ("reddit_weight", self.reddit_weight),
            ("critical_threshold", self.critical_threshold),
            ("high_threshold", self.high_threshold),
            ("medium_threshold", self.medium_threshold),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("{value} is outside [0, 1]"),
                }
                .into());
            }
        }

        if !(-1.0..=1.0).contains(&self.sentiment_score_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "sentiment_score_threshold".to_string(),
                reason: format!("{} is outside [-1, 1]", self.sentiment_score_threshold),
            }
            .into());
        }

        if !(self.medium_threshold <= self.high_threshold
            && self.high_threshold <= self.critical_threshold)
        {
            return Err(ConfigError::InvalidValue {
                field: "severity thresholds".to_string(),
                reason: "expected medium <= high <= critical".to_string(),
            }
            .into());
        }

        if self.max_suggestions > MAX_SUGGESTIONS {
            return Err(ConfigError::InvalidValue {
                field: "max_suggestions".to_string(),
                reason: format!(
                    "{} exceeds the cap of {MAX_SUGGESTIONS}",
                    self.max_suggestions
                ),
            }
            .into());
        }

        if self.repeat_run_length < 2 {
            return Err(ConfigError::InvalidValue {
                field: "repeat_run_length".to_string(),
                reason: "a run needs at least 2 characters".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
