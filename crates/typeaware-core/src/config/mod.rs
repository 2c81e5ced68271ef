pub mod defaults;
mod detection_config;
mod observability_config;
mod retention_config;

pub use detection_config::{DetectionConfig, HeuristicGate};
pub use observability_config::ObservabilityConfig;
pub use retention_config::RetentionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TypeAwareResult};

/// Root configuration. Every section falls back to its defaults, so an empty
/// TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeAwareConfig {
    pub detection: DetectionConfig,
    pub retention: RetentionConfig,
    pub observability: ObservabilityConfig,
}

impl TypeAwareConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(input: &str) -> TypeAwareResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the heuristics meaningless.
    pub fn validate(&self) -> TypeAwareResult<()> {
        self.detection.validate()?;
        self.retention.validate()?;
        Ok(())
    }
}
