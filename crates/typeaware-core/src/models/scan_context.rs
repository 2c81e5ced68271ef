use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Platform;

/// Optional context supplied alongside the text being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScanContext {
    pub platform: Platform,
}

impl ScanContext {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn from_hostname(hostname: &str) -> Self {
        Self::new(Platform::from_hostname(hostname))
    }
}

/// Which variant of the input text gets scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ScanMode {
    /// The text exactly as given.
    #[default]
    Raw,
    /// Lower-cased with leetspeak substitutions undone.
    Normalized,
    /// Both of the above, merged into one verdict.
    Both,
}
