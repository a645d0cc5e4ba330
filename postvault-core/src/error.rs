//! Core error types for postvault.

use thiserror::Error;

/// Core error type for postvault operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid data from an API response or archive element.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
