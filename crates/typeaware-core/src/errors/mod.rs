mod config_error;
mod storage_error;

pub use config_error::ConfigError;
pub use storage_error::StorageError;

/// Convenience alias used throughout the workspace.
pub type TypeAwareResult<T> = Result<T, TypeAwareError>;

/// Top-level error type. Scanning itself never fails; these surface only
/// while building rule sets, loading config, or touching persisted state.
#[derive(Debug, thiserror::Error)]
pub enum TypeAwareError {
    #[error("invalid pattern for {category}: `{pattern}`: {reason}")]
    InvalidPattern {
        category: String,
        pattern: String,
        reason: String,
    },

    #[error("rule weight {weight} for {category} is outside [0, 1]")]
    InvalidWeight { category: String, weight: f64 },

    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("unknown platform: {name}")]
    UnknownPlatform { name: String },

    #[error("invalid message: {reason}")]
    InvalidMessage { reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
