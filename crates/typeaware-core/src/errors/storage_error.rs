/// Errors from the key-value persistence backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("backend failure: {message}")]
    Backend { message: String },

    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("corrupt value under key {key}: {reason}")]
    Corrupt { key: String, reason: String },
}
