use serde::{Deserialize, Serialize};
use ts_rs::TS;
use typeaware_core::{Platform, ScanMode};
use typeaware_state::{NewReport, StatsDelta};

/// A message sent to the background script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "action", rename_all = "camelCase")]
#[ts(export)]
pub enum Request {
    /// Add to the stored counters.
    UpdateStats { data: StatsDelta },
    /// Store a user report of flagged content.
    ReportContent { data: NewReport },
    #[serde(rename = "getUUID")]
    GetUuid,
    /// Run the detector on text from the web app.
    AnalyzeText { data: AnalyzeTextData },
    GetStats,
    UpdateSettings {
        #[serde(default)]
        data: SettingsUpdate,
    },
    GetStatus,
    /// Popup toggle, relayed to content scripts.
    ToggleExtension { enabled: bool },
}

impl Request {
    /// Wire name of the action.
    pub fn action(&self) -> &'static str {
        match self {
            Request::UpdateStats { .. } => "updateStats",
            Request::ReportContent { .. } => "reportContent",
            Request::GetUuid => "getUUID",
            Request::AnalyzeText { .. } => "analyzeText",
            Request::GetStats => "getStats",
            Request::UpdateSettings { .. } => "updateSettings",
            Request::GetStatus => "getStatus",
            Request::ToggleExtension { .. } => "toggleExtension",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalyzeTextData {
    pub text: String,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub mode: Option<ScanMode>,
}

/// Settings the web app may change. Absent fields are left as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SettingsUpdate {
    pub enabled: Option<bool>,
}
