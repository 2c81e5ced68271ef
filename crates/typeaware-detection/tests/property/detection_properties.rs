use std::collections::BTreeSet;

use proptest::prelude::*;
use typeaware_core::config::DetectionConfig;
use typeaware_core::{Category, Confidence, Platform, ScanContext};
use typeaware_detection::{severity, DetectionEngine};

fn platform() -> impl Strategy<Value = Option<ScanContext>> {
    prop_oneof![
        Just(None),
        Just(Some(ScanContext::new(Platform::Twitter))),
        Just(Some(ScanContext::new(Platform::YouTube))),
        Just(Some(ScanContext::new(Platform::Reddit))),
        Just(Some(ScanContext::new(Platform::Facebook))),
        Just(Some(ScanContext::new(Platform::Generic))),
    ]
}

fn category_set() -> impl Strategy<Value = BTreeSet<Category>> {
    proptest::sample::subsequence(Category::ALL.to_vec(), 0..=Category::ALL.len())
        .prop_map(|v| v.into_iter().collect())
}

// ── Short input is always clean ───────────────────────────────────────────

proptest! {
    #[test]
    fn short_text_is_never_abusive(
        pad_left in "[ \t\n]{0,4}",
        core in ".{0,2}",
        pad_right in "[ \t\n]{0,4}",
        ctx in platform(),
    ) {
        let text = format!("{pad_left}{core}{pad_right}");
        prop_assume!(text.trim().chars().count() < 3);
        let engine = DetectionEngine::new();
        let verdict = engine.scan(&text, ctx.as_ref());
        prop_assert!(!verdict.is_abusive);
        prop_assert!(verdict.confidence.is_zero());
    }
}

// ── Determinism and output bounds ─────────────────────────────────────────

proptest! {
    #[test]
    fn scanning_is_deterministic(text in ".{0,200}", ctx in platform()) {
        let engine = DetectionEngine::new();
        prop_assert_eq!(engine.scan(&text, ctx.as_ref()), engine.scan(&text, ctx.as_ref()));
    }

    #[test]
    fn suggestions_are_bounded_and_distinct(text in ".{0,200}", ctx in platform()) {
        let engine = DetectionEngine::new();
        let verdict = engine.scan(&text, ctx.as_ref());
        prop_assert!(verdict.suggestions.len() <= 3);
        let distinct: BTreeSet<&String> = verdict.suggestions.iter().collect();
        prop_assert_eq!(distinct.len(), verdict.suggestions.len());
    }

    #[test]
    fn abusive_iff_categories_present(text in ".{0,200}") {
        let verdict = DetectionEngine::new().scan(&text, None);
        prop_assert_eq!(verdict.is_abusive, !verdict.categories.is_empty());
        prop_assert!((0.0..=1.0).contains(&verdict.confidence.value()));
    }
}

// ── Case-insensitivity of rule categories ─────────────────────────────────

proptest! {
    #[test]
    fn trigger_phrase_case_does_not_matter(
        phrase in prop::sample::select(vec![
            "kill yourself", "you should die", "watch your back", "buy now",
            "i hate you", "shut up", "damn",
        ]),
        upper in any::<bool>(),
    ) {
        let engine = DetectionEngine::new();
        let lower = engine.scan(phrase, None);
        let variant = if upper { phrase.to_uppercase() } else { phrase.to_string() };
        let other = engine.scan(&variant, None);
        prop_assert!(lower.is_abusive);
        prop_assert_eq!(lower.categories, other.categories);
    }
}

// ── Severity monotonicity ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn severity_is_monotone_in_confidence(
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        categories in category_set(),
    ) {
        let config = DetectionConfig::default();
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        let s_hi = severity::derive(Confidence::new(hi), &categories, &config);
        let s_lo = severity::derive(Confidence::new(lo), &categories, &config);
        prop_assert!(s_hi >= s_lo, "{hi} -> {s_hi:?} but {lo} -> {s_lo:?}");
    }
}
