//! Safety report for the web demo page.

use serde::Serialize;
use ts_rs::TS;
use typeaware_core::traits::IDetector;
use typeaware_core::{Category, Severity, Verdict};

const CLEAN_SUGGESTION: &str = "Your message looks great!";

/// Shown when a text is flagged only by categories with no rewrite table.
const GENERAL_SUGGESTIONS: [&str; 3] = [
    "Consider using more respectful language",
    "Focus on constructive communication",
    "Take a moment before posting",
];

/// One flagged category as the demo page lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DemoThreat {
    pub category: Category,
    pub severity: Severity,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DemoAnalysis {
    pub is_abusive: bool,
    /// 100 minus 25 per flagged category, floored at 0.
    pub safety_score: u8,
    pub severity: Severity,
    pub confidence: f64,
    pub threats: Vec<DemoThreat>,
    pub suggestions: Vec<String>,
}

impl DemoAnalysis {
    pub fn analyze<D: IDetector + ?Sized>(detector: &D, text: &str) -> Self {
        Self::from_verdict(&detector.scan(text, None))
    }

    pub fn from_verdict(verdict: &Verdict) -> Self {
        let threats = verdict
            .categories
            .iter()
            .map(|&category| DemoThreat {
                category,
                severity: verdict.severity,
                context: threat_context(category).to_string(),
            })
            .collect();

        let suggestions = if !verdict.is_abusive {
            vec![CLEAN_SUGGESTION.to_string()]
        } else if verdict.suggestions.is_empty() {
            GENERAL_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            verdict.suggestions.clone()
        };

        Self {
            is_abusive: verdict.is_abusive,
            safety_score: verdict.safety_score(),
            severity: verdict.severity,
            confidence: verdict.confidence.value(),
            threats,
            suggestions,
        }
    }
}

fn threat_context(category: Category) -> &'static str {
    match category {
        Category::Harassment => "Harassment pattern detected",
        Category::Hate => "Hateful language detected",
        Category::Spam => "Spam or promotional content detected",
        Category::Profanity => "Profanity detected",
        Category::Threats => "Threatening language detected",
        Category::Aggressive => "Aggressive communication style",
        Category::Negative => "Strongly negative tone",
    }
}
