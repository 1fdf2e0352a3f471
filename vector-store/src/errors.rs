//! Unified error types for the crate.

use thiserror::Error;

/// Top-level error for vector-store operations.
#[derive(Debug, Error)]
pub enum VectorStoreError {
    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Distance label outside the supported set.
    #[error("Unsupported distance '{label}'. Expected one of {expected:?}.")]
    UnsupportedDistance {
        label: String,
        expected: [&'static str; 3],
    },

    /// Payload could not be converted to or from the Qdrant representation.
    #[error("payload error: {0}")]
    Payload(String),

    /// Qdrant client errors (wrapped).
    #[error("qdrant error: {0}")]
    Qdrant(String),
}
