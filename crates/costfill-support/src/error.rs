use thiserror::Error;

/// Error reported by the Support service itself (a modeled service error with a code).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code} - {message}")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Failure of a `CreateCase` call.
#[derive(Debug, Error)]
pub enum SupportCallError {
    /// The service answered with an error code.
    #[error("support service error: {0}")]
    Provider(#[from] ProviderError),

    /// Anything else: connection, timeout, malformed response.
    #[error("{0}")]
    Unexpected(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BACKFILL_MONTHS: {0:?} (expected a positive integer)")]
    InvalidMonths(String),
}
