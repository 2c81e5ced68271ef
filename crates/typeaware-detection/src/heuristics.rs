//! Text-shape heuristics that need no vocabulary: shouting and
//! stretched-out characters.

use typeaware_core::config::DetectionConfig;
use typeaware_core::{Category, Confidence};

/// A heuristic that fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicHit {
    pub category: Category,
    pub confidence: Confidence,
}

/// Share of uppercase letters over the total character count.
pub fn caps_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut upper = 0usize;
    for ch in text.chars() {
        total += 1;
        if ch.is_uppercase() {
            upper += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    upper as f64 / total as f64
}

/// Length of the longest run of one repeated character. Line breaks end a
/// run and never count towards one.
pub fn longest_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<char> = None;

    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            previous = None;
            current = 0;
            continue;
        }
        if previous == Some(ch) {
            current += 1;
        } else {
            previous = Some(ch);
            current = 1;
        }
        longest = longest.max(current);
    }
    longest
}

/// Mostly-uppercase text longer than the configured minimum reads as shouting.
pub fn detect_shouting(text: &str, config: &DetectionConfig) -> Option<HeuristicHit> {
    let long_enough = text.chars().count() > config.caps_min_length;
    (long_enough && caps_ratio(text) > config.caps_ratio_threshold).then(|| HeuristicHit {
        category: Category::Aggressive,
        confidence: Confidence::new(config.caps_confidence),
    })
}

/// Characters stretched out over a run of identical characters ("soooooo").
pub fn detect_repetition(text: &str, config: &DetectionConfig) -> Option<HeuristicHit> {
    (longest_run(text) >= config.repeat_run_length).then(|| HeuristicHit {
        category: Category::Spam,
        confidence: Confidence::new(config.repeat_confidence),
    })
}

/// Run every generic heuristic.
pub fn evaluate(text: &str, config: &DetectionConfig) -> Vec<HeuristicHit> {
    [detect_shouting(text, config), detect_repetition(text, config)]
        .into_iter()
        .flatten()
        .collect()
}
