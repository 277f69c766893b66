// Rust guideline compliant 2026-10-18

//! Error types for the buildboard core library.

use thiserror::Error;

/// Result type alias for buildboard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for buildboard operations.
///
/// Rule violations are never represented here: validation rules return
/// user-facing messages instead of failing.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid document data.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Document not found.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Invalid configuration value or file.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A value could not be parsed into a domain enum.
    #[error("Invalid {kind}: {value}")]
    InvalidValue {
        /// Name of the expected kind of value.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}
