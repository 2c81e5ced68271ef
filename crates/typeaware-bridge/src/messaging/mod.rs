//! Background-script message protocol.
//!
//! Requests arrive as JSON objects tagged by `action`; the router applies
//! them to the state store or hands text to the detector.

mod request;
mod response;
mod router;

pub use request::{AnalyzeTextData, Request, SettingsUpdate};
pub use response::{Response, StatusInfo};
pub use router::MessageRouter;
