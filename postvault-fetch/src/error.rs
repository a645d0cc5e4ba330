//! Fetch error types.

use thiserror::Error;

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 429. Carries whatever back-off hints the response
    /// included; the pagination engine turns these into a wait.
    #[error("Rate limited (retry-after: {retry_after:?}, reset: {reset_at:?})")]
    RateLimited {
        /// Seconds to wait, from a well-formed `retry-after` header.
        retry_after: Option<u64>,
        /// Epoch seconds at which the limit resets, from `x-rate-limit-reset`.
        reset_at: Option<i64>,
    },

    /// Non-success status or a body that does not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Handle could not be mapped to an account id. Wraps the underlying
    /// cause; never retried.
    #[error("Failed to resolve handle '{handle}': {source}")]
    ResolutionFailed {
        /// The handle the lookup was attempted for.
        handle: String,
        /// Underlying cause.
        #[source]
        source: Box<FetchError>,
    },

    /// Handle failed the input constraint (empty, or still carrying a marker).
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    /// Core validation error.
    #[error("Core error: {0}")]
    Core(#[from] postvault_core::CoreError),
}
