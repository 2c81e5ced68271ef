use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ts_rs::TS;

use super::{Category, Confidence, Severity};
use crate::constants::{MAX_SAFETY_SCORE, SAFETY_PENALTY_PER_CATEGORY};

/// Structured result of scanning one text. Owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Verdict {
    pub is_abusive: bool,
    /// Flagged categories, iterated in `Category` declaration order.
    pub categories: BTreeSet<Category>,
    /// Maximum weight across every contributing rule and heuristic.
    pub confidence: Confidence,
    pub severity: Severity,
    /// Matched substrings in rule order, duplicates kept for highlighting.
    pub matches: Vec<String>,
    /// Up to three distinct rewrite suggestions.
    pub suggestions: Vec<String>,
}

impl Verdict {
    /// A non-abusive verdict with zero confidence.
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// The category a UI would label the text with.
    pub fn primary_category(&self) -> Option<Category> {
        self.categories.iter().next().copied()
    }

    /// Demo-page safety score: 100 minus 25 per flagged category, floored at 0.
    pub fn safety_score(&self) -> u8 {
        let penalty = self
            .categories
            .len()
            .saturating_mul(SAFETY_PENALTY_PER_CATEGORY as usize);
        (MAX_SAFETY_SCORE as usize).saturating_sub(penalty) as u8
    }
}
