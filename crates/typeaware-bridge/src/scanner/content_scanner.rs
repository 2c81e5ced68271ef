use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use dashmap::DashSet;
use rayon::prelude::*;
use typeaware_core::config::DetectionConfig;
use typeaware_core::errors::TypeAwareResult;
use typeaware_core::traits::{IDetector, IKeyValueStore};
use typeaware_core::{ScanContext, Verdict};
use typeaware_state::{DetectionRecord, StateStore, StatsDelta};

use super::element::{ElementAction, ElementText, PageContext, SkipReason};
use super::input_monitor::{InputMonitor, InputWarning};

/// Scans page elements once each, recording detections and counters.
pub struct ContentScanner<D, S> {
    detector: Arc<D>,
    state: Arc<StateStore<S>>,
    context: ScanContext,
    url: Option<String>,
    min_text_length: usize,
    enabled: AtomicBool,
    processed: DashSet<String>,
    input: InputMonitor<D>,
}

impl<D: IDetector, S: IKeyValueStore> ContentScanner<D, S> {
    /// Platform comes from the page hostname; the enabled flag is read from
    /// the store once, then driven by `set_enabled`.
    pub fn new(
        detector: Arc<D>,
        state: Arc<StateStore<S>>,
        page: PageContext,
        config: &DetectionConfig,
    ) -> TypeAwareResult<Self> {
        let context = ScanContext::from_hostname(&page.hostname);
        let enabled = state.is_enabled()?;
        tracing::debug!(platform = %context.platform, enabled, "content scanner attached");

        Ok(Self {
            input: InputMonitor::new(Arc::clone(&detector), context, config.input_min_length),
            detector,
            state,
            context,
            url: page.url,
            min_text_length: config.min_text_length,
            enabled: AtomicBool::new(enabled),
            processed: DashSet::new(),
        })
    }

    pub fn context(&self) -> ScanContext {
        self.context
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Elements seen so far.
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Scan one element. If recording its detection fails, the element is
    /// released so a later call scans it again.
    pub fn scan_element(&self, element: &ElementText) -> TypeAwareResult<ElementAction> {
        let text = match self.admit(element) {
            Ok(text) => text,
            Err(reason) => return Ok(skip(element, reason)),
        };
        let verdict = self.detector.scan(text, Some(&self.context));

        let mut delta = StatsDelta::default();
        let settled = self.settle(element, text, &verdict, &mut delta);
        if settled.is_err() {
            self.processed.remove(&element.id);
        }
        self.apply(delta)?;
        settled
    }

    /// Scan many elements, running detection in parallel. Actions come back
    /// in input order, and duplicate ids within the batch are skipped after
    /// their first occurrence.
    ///
    /// On a storage failure the batch stops: counters cover the elements
    /// settled so far, and the rest are released for a later scan.
    pub fn scan_batch(&self, elements: &[ElementText]) -> TypeAwareResult<Vec<ElementAction>> {
        let admitted: Vec<Result<&str, SkipReason>> =
            elements.iter().map(|element| self.admit(element)).collect();

        let scanned: Vec<Result<(&str, Verdict), SkipReason>> = admitted
            .into_par_iter()
            .map(|admit| admit.map(|text| (text, self.detector.scan(text, Some(&self.context)))))
            .collect();

        let mut delta = StatsDelta::default();
        let mut actions = Vec::with_capacity(elements.len());
        let mut failure = None;
        let mut outcomes = elements.iter().zip(scanned);
        for (element, outcome) in outcomes.by_ref() {
            match outcome {
                Ok((text, verdict)) => match self.settle(element, text, &verdict, &mut delta) {
                    Ok(action) => actions.push(action),
                    Err(e) => {
                        self.processed.remove(&element.id);
                        failure = Some(e);
                        break;
                    }
                },
                Err(reason) => actions.push(skip(element, reason)),
            }
        }
        for (element, outcome) in outcomes {
            if outcome.is_ok() {
                self.processed.remove(&element.id);
            }
        }

        let applied = self.apply(delta);
        tracing::debug!(
            elements = elements.len(),
            scanned = delta.total_scanned,
            flagged = delta.threats_detected,
            failed = failure.is_some(),
            "batch scanned"
        );
        if let Some(e) = failure {
            if let Err(stats_error) = applied {
                tracing::warn!(error = %stats_error, "batch counters not saved");
            }
            return Err(e);
        }
        applied?;
        Ok(actions)
    }

    /// Live warning for an input; inert while detection is off.
    pub fn check_input(&self, text: &str) -> InputWarning {
        if !self.is_enabled() {
            return InputWarning::Unchanged;
        }
        self.input.check(text)
    }

    /// Claim the element and return its trimmed text, or why it is not
    /// scanned. Claims on short text are kept; the element is done.
    fn admit<'a>(&self, element: &'a ElementText) -> Result<&'a str, SkipReason> {
        if !self.is_enabled() {
            return Err(SkipReason::Disabled);
        }
        if !self.processed.insert(element.id.clone()) {
            return Err(SkipReason::AlreadyProcessed);
        }
        let text = element.text.trim();
        if text.chars().count() < self.min_text_length {
            return Err(SkipReason::TooShort);
        }
        Ok(text)
    }

    /// Record the verdict. `delta` only counts what was stored.
    fn settle(
        &self,
        element: &ElementText,
        text: &str,
        verdict: &Verdict,
        delta: &mut StatsDelta,
    ) -> TypeAwareResult<ElementAction> {
        if verdict.is_abusive {
            let record = DetectionRecord::from_verdict(
                verdict,
                text,
                self.context.platform,
                self.url.clone(),
                Utc::now(),
                self.state.retention().detection_content_limit,
            );
            self.state.record_detection(record)?;
            delta.threats_detected += 1;
        }
        delta.total_scanned += 1;
        Ok(ElementAction::from_verdict(&element.id, verdict))
    }

    fn apply(&self, delta: StatsDelta) -> TypeAwareResult<()> {
        if delta.is_empty() {
            return Ok(());
        }
        self.state.apply_stats_delta(delta).map(|_| ())
    }
}

fn skip(element: &ElementText, reason: SkipReason) -> ElementAction {
    ElementAction::Skip {
        id: element.id.clone(),
        reason,
    }
}
