//! # typeaware-bridge
//!
//! Adapters that sit between the detection engine and the extension shell.
//! Each one depends on `IDetector` and the state store only:
//!
//! - `messaging`: the background-script request/response protocol.
//! - `scanner`: page element scanning and live input warnings, DOM-free.
//! - `demo`: the demo page's safety report.
//! - `maintenance`: periodic retention cleanup.

pub mod demo;
pub mod maintenance;
pub mod messaging;
pub mod scanner;

pub use demo::{DemoAnalysis, DemoThreat};
pub use maintenance::CleanupScheduler;
pub use messaging::{MessageRouter, Request, Response};
pub use scanner::{ContentScanner, ElementAction, ElementText, InputMonitor, InputWarning, PageContext};
