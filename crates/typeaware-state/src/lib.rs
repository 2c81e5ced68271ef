//! # typeaware-state
//!
//! Persistent extension state behind an injected key-value backend:
//! install UUID, enabled flag, counters, and the rolling detection and
//! report logs with their retention policy.

pub mod backends;
pub mod bounded_log;
pub mod records;
pub mod store;

pub use backends::{InMemoryKvStore, JsonFileKvStore};
pub use bounded_log::BoundedLog;
pub use records::{DetectionRecord, ExtensionStats, NewReport, ReportRecord, StatsDelta};
pub use store::{CleanupSummary, StateStore};
