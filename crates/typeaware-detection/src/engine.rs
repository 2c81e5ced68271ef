use std::collections::BTreeSet;

use typeaware_core::config::{DetectionConfig, HeuristicGate};
use typeaware_core::traits::IDetector;
use typeaware_core::{Category, Confidence, ScanContext, ScanMode, Severity, Verdict};
use typeaware_observability::scan_span;

use crate::normalize::normalize_leetspeak;
use crate::platform_rules::PlatformRules;
use crate::rules::RuleSet;
use crate::{heuristics, sentiment, severity, suggestions};

/// Detection engine that layers category rules, sentiment, platform rules
/// and text-shape heuristics into a single verdict.
///
/// Implements `IDetector` from typeaware-core. Holds only immutable
/// configuration, so one engine can serve any number of threads.
pub struct DetectionEngine {
    rules: RuleSet,
    platform_rules: PlatformRules,
    config: DetectionConfig,
}

impl DetectionEngine {
    /// Create an engine with the built-in rule table and default thresholds.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::builtin(), DetectionConfig::default())
    }

    /// Built-in rule table with custom thresholds.
    pub fn with_config(config: DetectionConfig) -> Self {
        Self::with_rules(RuleSet::builtin(), config)
    }

    /// Custom rule table, e.g. a minimal fixture in tests.
    pub fn with_rules(rules: RuleSet, config: DetectionConfig) -> Self {
        tracing::info!(
            rule_count = rules.rule_count(),
            version = rules.version().unwrap_or("custom"),
            "detection engine ready"
        );
        Self {
            platform_rules: PlatformRules::from_config(&config),
            rules,
            config,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Scan raw text. Never fails; short or empty input yields a clean verdict.
    pub fn scan(&self, text: &str, context: Option<&ScanContext>) -> Verdict {
        let _span = scan_span!(text.len(), context.map(|c| c.platform)).entered();

        if text.trim().chars().count() < self.config.min_text_length {
            return Verdict::clean();
        }

        let mut acc = Accumulator::default();

        // Layer 1: category rules.
        for (category, rule) in self.rules.iter() {
            let mut hit = false;
            for m in rule.find_all(text) {
                acc.matches.push(m.to_string());
                hit = true;
            }
            if hit {
                acc.flag(category, rule.weight());
            }
        }
        let rule_matched = !acc.categories.is_empty();

        // Layer 2: sentiment, always evaluated and OR-ed in.
        let mood = sentiment::analyze(text);
        if mood.is_negative(
            self.config.sentiment_score_threshold,
            self.config.sentiment_magnitude_threshold,
        ) {
            acc.flag(Category::Negative, Confidence::new(mood.magnitude));
        }

        // Layer 3: platform rules, in addition to the base rules.
        if let Some(ctx) = context {
            for hit in self.platform_rules.evaluate(text, ctx.platform) {
                acc.matches.extend(hit.matches);
                acc.flag(hit.category, hit.weight);
            }
        }

        // Layer 4: text-shape heuristics.
        let run_heuristics = match self.config.generic_heuristics {
            HeuristicGate::Always => true,
            HeuristicGate::Fallback => !rule_matched,
        };
        if run_heuristics {
            for hit in heuristics::evaluate(text, &self.config) {
                acc.flag(hit.category, hit.confidence);
            }
        }

        let verdict = acc.finish(&self.config);
        if verdict.is_abusive {
            tracing::debug!(
                categories = ?verdict.categories,
                confidence = %verdict.confidence,
                severity = %verdict.severity,
                "abusive content detected"
            );
        }
        verdict
    }

    /// Scan the leetspeak-normalized form of `text`.
    pub fn scan_normalized(&self, text: &str, context: Option<&ScanContext>) -> Verdict {
        self.scan(&normalize_leetspeak(text), context)
    }

    /// Scan according to `mode`. `Both` unions the raw and normalized verdicts.
    pub fn scan_with_mode(
        &self,
        text: &str,
        context: Option<&ScanContext>,
        mode: ScanMode,
    ) -> Verdict {
        match mode {
            ScanMode::Raw => self.scan(text, context),
            ScanMode::Normalized => self.scan_normalized(text, context),
            ScanMode::Both => {
                let raw = self.scan(text, context);
                let normalized = self.scan_normalized(text, context);
                self.merge(raw, normalized)
            }
        }
    }

    /// Scan with the configured default mode.
    pub fn scan_default(&self, text: &str, context: Option<&ScanContext>) -> Verdict {
        self.scan_with_mode(text, context, self.config.scan_mode)
    }

    /// Union two verdicts for the same input, recomputing severity and
    /// suggestions from the merged categories.
    pub fn merge(&self, first: Verdict, second: Verdict) -> Verdict {
        let mut acc = Accumulator {
            categories: first.categories,
            confidence: first.confidence,
            matches: first.matches,
        };
        for category in second.categories {
            acc.categories.insert(category);
        }
        acc.confidence.raise_to(second.confidence);
        acc.matches.extend(second.matches);
        acc.finish(&self.config)
    }
}

impl Default for DetectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IDetector for DetectionEngine {
    fn scan(&self, text: &str, context: Option<&ScanContext>) -> Verdict {
        DetectionEngine::scan(self, text, context)
    }

    fn scan_with_mode(
        &self,
        text: &str,
        context: Option<&ScanContext>,
        mode: ScanMode,
    ) -> Verdict {
        DetectionEngine::scan_with_mode(self, text, context, mode)
    }
}

/// Running state of one scan.
#[derive(Default)]
struct Accumulator {
    categories: BTreeSet<Category>,
    confidence: Confidence,
    matches: Vec<String>,
}

impl Accumulator {
    fn flag(&mut self, category: Category, weight: Confidence) {
        self.categories.insert(category);
        self.confidence.raise_to(weight);
    }

    fn finish(self, config: &DetectionConfig) -> Verdict {
        if self.categories.is_empty() {
            return Verdict::clean();
        }
        let severity: Severity = severity::derive(self.confidence, &self.categories, config);
        let suggestions = suggestions::generate(&self.categories, config.max_suggestions);
        Verdict {
            is_abusive: true,
            categories: self.categories,
            confidence: self.confidence,
            severity,
            matches: self.matches,
            suggestions,
        }
    }
}
