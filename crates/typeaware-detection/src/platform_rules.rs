//! Extra rules that only apply when the caller says which site the text
//! came from. They add to the base rules, never replace them.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use typeaware_core::config::DetectionConfig;
use typeaware_core::{Category, Confidence, Platform};

macro_rules! platform_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| {
            RegexBuilder::new($regex_str)
                .case_insensitive(true)
                .build()
                .ok()
        });
    };
}

// ── Twitter / X: "@user is stupid", "@user sucks" ─────────────────────────
platform_pattern!(RE_TWITTER_MENTION_INSULT, r"@\w+\s+(?:is\s+)?stupid|@\w+\s+sucks");

// ── YouTube: "first!", "thumbs up if ..." bait comments ───────────────────
platform_pattern!(RE_YOUTUBE_BAIT, r"first|thumbs\s+up\s+if");

// ── Reddit: karma insults ─────────────────────────────────────────────────
platform_pattern!(RE_REDDIT_KARMA, r"downvoted|karma\s+whore");

/// A single platform-tailored rule.
pub struct PlatformRule {
    pub name: &'static str,
    pub platform: Platform,
    pub category: Category,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub weight: Confidence,
    /// Only texts shorter than this many characters are considered.
    pub max_length: Option<usize>,
}

/// Outcome of one platform rule firing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformHit {
    pub category: Category,
    pub weight: Confidence,
    pub matches: Vec<String>,
}

/// The fixed set of platform rules, weighted from config.
pub struct PlatformRules {
    rules: Vec<PlatformRule>,
}

impl PlatformRules {
    pub fn from_config(config: &DetectionConfig) -> Self {
        Self {
            rules: vec![
                PlatformRule {
                    name: "twitter_mention_insult",
                    platform: Platform::Twitter,
                    category: Category::Harassment,
                    regex: &RE_TWITTER_MENTION_INSULT,
                    weight: Confidence::new(config.twitter_weight),
                    max_length: None,
                },
                PlatformRule {
                    name: "youtube_bait",
                    platform: Platform::YouTube,
                    category: Category::Spam,
                    regex: &RE_YOUTUBE_BAIT,
                    weight: Confidence::new(config.youtube_weight),
                    max_length: Some(config.youtube_max_length),
                },
                PlatformRule {
                    name: "reddit_karma",
                    platform: Platform::Reddit,
                    category: Category::Harassment,
                    regex: &RE_REDDIT_KARMA,
                    weight: Confidence::new(config.reddit_weight),
                    max_length: None,
                },
            ],
        }
    }

    pub fn all(&self) -> &[PlatformRule] {
        &self.rules
    }

    /// Evaluate every rule registered for `platform` against `text`.
    pub fn evaluate(&self, text: &str, platform: Platform) -> Vec<PlatformHit> {
        let length = text.chars().count();
        self.rules
            .iter()
            .filter(|rule| rule.platform == platform)
            .filter(|rule| rule.max_length.map_or(true, |max| length < max))
            .filter_map(|rule| {
                let re = rule.regex.as_ref()?;
                let matches: Vec<String> =
                    re.find_iter(text).map(|m| m.as_str().to_string()).collect();
                if matches.is_empty() {
                    return None;
                }
                Some(PlatformHit {
                    category: rule.category,
                    weight: rule.weight,
                    matches,
                })
            })
            .collect()
    }
}
