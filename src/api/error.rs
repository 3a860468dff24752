//! API error types.

use thiserror::Error;

/// Failures surfaced to API callers as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One of `html`, `publishDate`, `slug` is absent or empty.
    #[error("Missing required fields")]
    MissingFields,

    /// Body is not parseable as JSON at all.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Request body exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    /// Storage failure; the full context chain is exposed to the caller.
    #[error("{0:#}")]
    Internal(anyhow::Error),
}

impl ApiError {
    /// HTTP status code for this error.
    pub const fn status(&self) -> u16 {
        match self {
            Self::MissingFields | Self::InvalidBody(_) => 400,
            Self::PayloadTooLarge { .. } => 413,
            Self::Internal(_) => 500,
        }
    }
}
