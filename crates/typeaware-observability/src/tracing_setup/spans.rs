//! Span definitions per operation: scan, store, message.
//!
//! Spans carry sizes and identifiers only, never scanned content.

/// Create a scan span.
#[macro_export]
macro_rules! scan_span {
    ($text_len:expr, $platform:expr) => {
        tracing::debug_span!("typeaware.scan", text_len = $text_len, platform = ?$platform)
    };
}

/// Create a state-store span.
#[macro_export]
macro_rules! store_span {
    ($operation:expr) => {
        tracing::debug_span!("typeaware.store", operation = %$operation)
    };
}

/// Create a message-handling span.
#[macro_export]
macro_rules! message_span {
    ($action:expr) => {
        tracing::info_span!("typeaware.message", action = %$action)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCAN: &str = "typeaware.scan";
    pub const STORE: &str = "typeaware.store";
    pub const MESSAGE: &str = "typeaware.message";
}
