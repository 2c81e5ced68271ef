//! # typeaware-observability
//!
//! Structured logging for the workspace: subscriber setup, span macros per
//! operation, and named event helpers so log lines stay consistent.

pub mod tracing_setup;

pub use tracing_setup::init_tracing;
