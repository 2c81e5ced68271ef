use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{Duration, Utc};
use typeaware_bridge::scanner::SkipReason;
use typeaware_bridge::{
    CleanupScheduler, ContentScanner, DemoAnalysis, ElementAction, ElementText, InputMonitor,
    InputWarning, PageContext,
};
use serde_json::Value;
use typeaware_core::config::{DetectionConfig, RetentionConfig};
use typeaware_core::constants::keys;
use typeaware_core::errors::StorageError;
use typeaware_core::traits::IKeyValueStore;
use typeaware_core::TypeAwareResult;
use typeaware_core::{Category, Platform, ScanContext, Severity};
use typeaware_detection::DetectionEngine;
use typeaware_state::{InMemoryKvStore, StateStore};

type Store = Arc<StateStore<InMemoryKvStore>>;

fn state() -> Store {
    let state = Arc::new(StateStore::new(
        InMemoryKvStore::new(),
        RetentionConfig::default(),
    ));
    state.initialize().unwrap();
    state
}

fn scanner_on(hostname: &str, state: &Store) -> ContentScanner<DetectionEngine, InMemoryKvStore> {
    ContentScanner::new(
        Arc::new(DetectionEngine::new()),
        Arc::clone(state),
        PageContext::new(hostname).with_url(format!("https://{hostname}/post/1")),
        &DetectionConfig::default(),
    )
    .unwrap()
}

// ── Element scanning ──

#[test]
fn flags_abusive_element_and_records_it() {
    let state = state();
    let scanner = scanner_on("example.org", &state);

    let action = scanner
        .scan_element(&ElementText::new("c1", "  you are such an idiot  "))
        .unwrap();
    match &action {
        ElementAction::Flag {
            label,
            categories,
            suggestions,
            ..
        } => {
            assert_eq!(label, "Potentially harassment content detected");
            assert!(categories.contains(&Category::Harassment));
            assert!(!suggestions.is_empty() && suggestions.len() <= 3);
        }
        other => panic!("expected a flag, got {other:?}"),
    }

    let detections = state.detections().unwrap();
    assert_eq!(detections.len(), 1);
    assert_eq!(detections[0].content, "you are such an idiot");
    assert_eq!(detections[0].url.as_deref(), Some("https://example.org/post/1"));

    let stats = state.stats().unwrap();
    assert_eq!(stats.total_scanned, 1);
    assert_eq!(stats.threats_detected, 1);
}

#[test]
fn clean_element_passes_and_counts_as_scanned() {
    let state = state();
    let scanner = scanner_on("example.org", &state);
    let action = scanner
        .scan_element(&ElementText::new("c1", "Thanks for sharing the recipe"))
        .unwrap();
    assert_eq!(action, ElementAction::Pass { id: "c1".to_string() });
    assert!(state.detections().unwrap().is_empty());
    assert_eq!(state.stats().unwrap().total_scanned, 1);
}

#[test]
fn each_element_is_scanned_once() {
    let state = state();
    let scanner = scanner_on("example.org", &state);
    let element = ElementText::new("c1", "you idiot");

    assert!(scanner.scan_element(&element).unwrap().is_flag());
    let again = scanner.scan_element(&element).unwrap();
    assert_eq!(
        again,
        ElementAction::Skip {
            id: "c1".to_string(),
            reason: SkipReason::AlreadyProcessed
        }
    );
    assert_eq!(state.stats().unwrap().total_scanned, 1);
}

#[test]
fn short_text_is_skipped_without_counting() {
    let state = state();
    let scanner = scanner_on("example.org", &state);
    let action = scanner.scan_element(&ElementText::new("c1", "  ok  ")).unwrap();
    assert!(matches!(
        action,
        ElementAction::Skip {
            reason: SkipReason::TooShort,
            ..
        }
    ));
    assert_eq!(state.stats().unwrap().total_scanned, 0);
}

#[test]
fn disabled_scanner_skips_everything() {
    let state = state();
    state.set_enabled(false).unwrap();
    let scanner = scanner_on("example.org", &state);
    assert!(!scanner.is_enabled());

    let action = scanner.scan_element(&ElementText::new("c1", "you idiot")).unwrap();
    assert!(matches!(
        action,
        ElementAction::Skip {
            reason: SkipReason::Disabled,
            ..
        }
    ));
    assert_eq!(scanner.processed_count(), 0);

    scanner.set_enabled(true);
    assert!(scanner.scan_element(&ElementText::new("c1", "you idiot")).unwrap().is_flag());
}

#[test]
fn platform_comes_from_hostname() {
    let state = state();
    let twitter = scanner_on("mobile.twitter.com", &state);
    assert_eq!(twitter.context().platform, Platform::Twitter);
    assert!(twitter
        .scan_element(&ElementText::new("t1", "@bob is stupid"))
        .unwrap()
        .is_flag());

    let detections = state.detections().unwrap();
    assert_eq!(detections[0].platform, Platform::Twitter);
}

// ── Batch scanning ──

#[test]
fn batch_preserves_order_and_dedupes() {
    let state = state();
    let scanner = scanner_on("example.org", &state);
    let elements = vec![
        ElementText::new("a", "What a lovely garden"),
        ElementText::new("b", "nobody likes you"),
        ElementText::new("c", "hi"),
        ElementText::new("b", "nobody likes you"),
        ElementText::new("d", "buy now limited time"),
    ];

    let actions = scanner.scan_batch(&elements).unwrap();
    let ids: Vec<_> = actions.iter().map(ElementAction::id).collect();
    assert_eq!(ids, ["a", "b", "c", "b", "d"]);

    assert!(matches!(actions[0], ElementAction::Pass { .. }));
    assert!(actions[1].is_flag());
    assert!(matches!(
        actions[2],
        ElementAction::Skip {
            reason: SkipReason::TooShort,
            ..
        }
    ));
    assert!(matches!(
        actions[3],
        ElementAction::Skip {
            reason: SkipReason::AlreadyProcessed,
            ..
        }
    ));
    assert!(actions[4].is_flag());

    let stats = state.stats().unwrap();
    assert_eq!(stats.total_scanned, 3);
    assert_eq!(stats.threats_detected, 2);
    assert_eq!(state.detections().unwrap().len(), 2);
}

#[test]
fn batch_matches_sequential_scanning() {
    let texts = [
        "you should die",
        "Great work on this",
        "THIS IS VERY ANNOYING TODAY",
        "soooooo good",
        "i'll find you",
    ];
    let elements: Vec<_> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| ElementText::new(i.to_string(), *t))
        .collect();

    let batch = scanner_on("example.org", &state()).scan_batch(&elements).unwrap();
    let sequential = scanner_on("example.org", &state());
    let one_by_one: Vec<_> = elements
        .iter()
        .map(|e| sequential.scan_element(e).unwrap())
        .collect();
    assert_eq!(batch, one_by_one);
}

// ── Storage failures ──

/// In-memory backend that rejects detection-log writes once its allowance
/// runs out.
struct FlakyKvStore {
    inner: InMemoryKvStore,
    detection_writes_left: AtomicUsize,
}

impl FlakyKvStore {
    fn failing_after(writes: usize) -> Self {
        Self {
            inner: InMemoryKvStore::new(),
            detection_writes_left: AtomicUsize::new(writes),
        }
    }

    fn heal(&self) {
        self.detection_writes_left.store(usize::MAX, Ordering::SeqCst);
    }
}

impl IKeyValueStore for FlakyKvStore {
    fn get(&self, key: &str) -> TypeAwareResult<Option<Value>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: Value) -> TypeAwareResult<()> {
        if key == keys::DETECTIONS {
            let allowed = self
                .detection_writes_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1));
            if allowed.is_err() {
                return Err(StorageError::Backend {
                    message: "quota exceeded".to_string(),
                }
                .into());
            }
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> TypeAwareResult<()> {
        self.inner.remove(key)
    }

    fn clear(&self) -> TypeAwareResult<()> {
        self.inner.clear()
    }
}

fn flaky_scanner(
    writes: usize,
) -> (
    Arc<StateStore<FlakyKvStore>>,
    ContentScanner<DetectionEngine, FlakyKvStore>,
) {
    let state = Arc::new(StateStore::new(
        FlakyKvStore::failing_after(writes),
        RetentionConfig::default(),
    ));
    let scanner = ContentScanner::new(
        Arc::new(DetectionEngine::new()),
        Arc::clone(&state),
        PageContext::new("example.org"),
        &DetectionConfig::default(),
    )
    .unwrap();
    (state, scanner)
}

#[test]
fn failed_batch_keeps_stats_consistent_and_releases_unsettled_elements() {
    let (state, scanner) = flaky_scanner(1);
    let elements = vec![
        ElementText::new("a", "you should die"),
        ElementText::new("b", "nobody likes you"),
        ElementText::new("c", "i hate you"),
    ];

    assert!(scanner.scan_batch(&elements).is_err());
    assert_eq!(state.detections().unwrap().len(), 1);
    let stats = state.stats().unwrap();
    assert_eq!(stats.total_scanned, 1);
    assert_eq!(stats.threats_detected, 1);
    assert_eq!(scanner.processed_count(), 1);

    state.backend().heal();
    let retry = scanner.scan_batch(&elements).unwrap();
    assert!(matches!(
        retry[0],
        ElementAction::Skip {
            reason: SkipReason::AlreadyProcessed,
            ..
        }
    ));
    assert!(retry[1].is_flag());
    assert!(retry[2].is_flag());
    assert_eq!(state.detections().unwrap().len(), 3);
    assert_eq!(state.stats().unwrap().threats_detected, 3);
}

#[test]
fn failed_element_can_be_scanned_again() {
    let (state, scanner) = flaky_scanner(0);
    let element = ElementText::new("a", "you should die");

    assert!(scanner.scan_element(&element).is_err());
    assert_eq!(state.stats().unwrap().total_scanned, 0);
    assert_eq!(scanner.processed_count(), 0);

    state.backend().heal();
    assert!(scanner.scan_element(&element).unwrap().is_flag());
    assert_eq!(state.stats().unwrap().threats_detected, 1);
}

// ── Input monitoring ──

#[test]
fn input_monitor_thresholds() {
    let monitor = InputMonitor::new(
        Arc::new(DetectionEngine::new()),
        ScanContext::default(),
        10,
    );
    assert_eq!(monitor.check("you idiot"), InputWarning::Unchanged);
    assert_eq!(monitor.check("what a nice day"), InputWarning::Hide);
    match monitor.check("you are an idiot") {
        InputWarning::Show {
            category, title, ..
        } => {
            assert_eq!(category, Some(Category::Harassment));
            assert_eq!(title, "Potentially harassment content");
        }
        other => panic!("expected a warning, got {other:?}"),
    }
}

#[test]
fn input_monitor_exactly_ten_chars_is_scanned() {
    let monitor = InputMonitor::new(
        Arc::new(DetectionEngine::new()),
        ScanContext::default(),
        10,
    );
    assert_eq!("ugh idiot!".chars().count(), 10);
    assert!(matches!(monitor.check("ugh idiot!"), InputWarning::Show { .. }));
}

#[test]
fn disabled_scanner_leaves_inputs_alone() {
    let state = state();
    let scanner = scanner_on("example.org", &state);
    scanner.set_enabled(false);
    assert_eq!(scanner.check_input("you are an idiot"), InputWarning::Unchanged);
}

// ── Demo page ──

#[test]
fn demo_clean_text() {
    let analysis = DemoAnalysis::analyze(&DetectionEngine::new(), "Thanks for the help today");
    assert!(!analysis.is_abusive);
    assert_eq!(analysis.safety_score, 100);
    assert!(analysis.threats.is_empty());
    assert_eq!(analysis.suggestions, vec!["Your message looks great!"]);
}

#[test]
fn demo_scores_per_category() {
    let analysis = DemoAnalysis::analyze(&DetectionEngine::new(), "you idiot, i hate you");
    assert!(analysis.is_abusive);
    let categories: Vec<_> = analysis.threats.iter().map(|t| t.category).collect();
    assert!(categories.contains(&Category::Harassment));
    assert!(categories.contains(&Category::Hate));
    assert_eq!(
        analysis.safety_score,
        100u8.saturating_sub(25 * categories.len() as u8)
    );
    assert!(analysis.suggestions.len() <= 3);
}

#[test]
fn demo_aggressive_only_gets_general_advice() {
    let analysis = DemoAnalysis::analyze(&DetectionEngine::new(), "THIS IS VERY ANNOYING TODAY");
    assert_eq!(analysis.safety_score, 75);
    assert_eq!(analysis.threats[0].category, Category::Aggressive);
    assert_eq!(analysis.severity, Severity::Medium);
    assert_eq!(analysis.suggestions.len(), 3);
    assert_eq!(analysis.suggestions[0], "Consider using more respectful language");
}

// ── Scheduled cleanup ──

#[test]
fn cleanup_runs_once_per_interval() {
    let state = state();
    let scheduler = CleanupScheduler::new(Arc::clone(&state));
    assert_eq!(scheduler.interval(), Duration::minutes(60));

    let now = Utc::now();
    assert!(scheduler.is_due(now));
    assert!(scheduler.tick(now).unwrap().is_some());
    assert_eq!(scheduler.last_run(), Some(now));

    assert!(scheduler.tick(now + Duration::minutes(30)).unwrap().is_none());
    assert!(scheduler.tick(now + Duration::minutes(60)).unwrap().is_some());
}

// ── Properties ──

mod properties {
    use std::sync::Arc;

    use proptest::prelude::*;
    use typeaware_bridge::{InputMonitor, InputWarning};
    use typeaware_core::ScanContext;
    use typeaware_detection::DetectionEngine;

    proptest! {
        #[test]
        fn short_input_leaves_warning_unchanged(text in "\\PC{0,9}") {
            let monitor = InputMonitor::new(
                Arc::new(DetectionEngine::new()),
                ScanContext::default(),
                10,
            );
            prop_assert_eq!(monitor.check(&text), InputWarning::Unchanged);
        }
    }
}
