//! # typeaware-detection
//!
//! The detection engine: takes a string plus optional platform context and
//! decides whether it is abusive, which categories it falls into, how
//! confident and severe that call is, and what it could be rewritten as.
//!
//! Evaluation is layered. Category rules, the sentiment heuristic, platform
//! rules and the generic heuristics each contribute categories and confidence
//! independently, and the verdict is their union.

pub mod engine;
pub mod heuristics;
pub mod normalize;
pub mod platform_rules;
pub mod rules;
pub mod sentiment;
pub mod severity;
pub mod suggestions;

pub use engine::DetectionEngine;
pub use normalize::{fuzzy_match, fuzzy_pattern, normalize_leetspeak};
pub use rules::{Rule, RuleDefinition, RuleSet};
