//! # typeaware-core
//!
//! Foundation crate for the TypeAware content-detection system.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TypeAwareConfig;
pub use errors::{TypeAwareError, TypeAwareResult};
pub use models::{Category, Confidence, Platform, ScanContext, ScanMode, Severity, Verdict};
