use std::sync::Arc;

use chrono::Utc;
use typeaware_core::constants::VERSION;
use typeaware_core::errors::{TypeAwareError, TypeAwareResult};
use typeaware_core::traits::{IDetector, IKeyValueStore};
use typeaware_core::ScanContext;
use typeaware_observability::message_span;
use typeaware_observability::tracing_setup::events;
use typeaware_state::StateStore;

use super::{AnalyzeTextData, Request, Response, StatusInfo};

/// Dispatches background-script requests.
pub struct MessageRouter<D, S> {
    detector: Arc<D>,
    state: Arc<StateStore<S>>,
}

impl<D: IDetector, S: IKeyValueStore> MessageRouter<D, S> {
    pub fn new(detector: Arc<D>, state: Arc<StateStore<S>>) -> Self {
        Self { detector, state }
    }

    pub fn state(&self) -> &StateStore<S> {
        &self.state
    }

    pub fn handle(&self, request: Request) -> TypeAwareResult<Response> {
        let _span = message_span!(request.action()).entered();

        match request {
            Request::UpdateStats { data } => {
                let stats = self.state.apply_stats_delta(data)?;
                Ok(Response::Stats { stats })
            }
            Request::ReportContent { data } => {
                if data.content.trim().is_empty() {
                    return Err(reject("report content is empty"));
                }
                let report = self.state.submit_report(data, Utc::now())?;
                Ok(Response::Reported { report })
            }
            Request::GetUuid => Ok(Response::Uuid {
                uuid: self.state.uuid()?,
            }),
            Request::AnalyzeText { data } => Ok(Response::Analysis {
                verdict: self.analyze(&data),
            }),
            Request::GetStats => Ok(Response::Stats {
                stats: self.state.stats()?,
            }),
            Request::UpdateSettings { data } => {
                if let Some(enabled) = data.enabled {
                    self.state.set_enabled(enabled)?;
                }
                self.status()
            }
            Request::GetStatus => self.status(),
            Request::ToggleExtension { enabled } => {
                self.state.set_enabled(enabled)?;
                tracing::info!(enabled, "detection toggled");
                self.status()
            }
        }
    }

    /// Decode a JSON request and handle it. Undecodable input is an
    /// `InvalidMessage` error.
    pub fn handle_json(&self, raw: &str) -> TypeAwareResult<Response> {
        let request: Request =
            serde_json::from_str(raw).map_err(|e| reject(&e.to_string()))?;
        self.handle(request)
    }

    fn analyze(&self, data: &AnalyzeTextData) -> typeaware_core::Verdict {
        let context = data.platform.map(ScanContext::new);
        self.detector
            .scan_with_mode(&data.text, context.as_ref(), data.mode.unwrap_or_default())
    }

    fn status(&self) -> TypeAwareResult<Response> {
        Ok(Response::Status {
            status: StatusInfo {
                enabled: self.state.is_enabled()?,
                version: VERSION.to_string(),
            },
        })
    }
}

fn reject(reason: &str) -> TypeAwareError {
    events::message_rejected(reason);
    TypeAwareError::InvalidMessage {
        reason: reason.to_string(),
    }
}
