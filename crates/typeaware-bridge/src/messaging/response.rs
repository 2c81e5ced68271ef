use serde::Serialize;
use ts_rs::TS;
use typeaware_core::Verdict;
use typeaware_state::{ExtensionStats, ReportRecord};
use uuid::Uuid;

/// Reply to a `Request`. Serialized untagged so each reply is the bare
/// object the caller reads fields from, e.g. `{ "uuid": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Response {
    Stats { stats: ExtensionStats },
    Reported { report: ReportRecord },
    Uuid { uuid: Option<Uuid> },
    Analysis { verdict: Verdict },
    Status { status: StatusInfo },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StatusInfo {
    pub enabled: bool,
    pub version: String,
}
