use thiserror::Error;

/// Failure of one Cost Explorer call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service answered with an error code.
    #[error("{operation} failed: {code} - {message}")]
    Provider {
        operation: &'static str,
        code: String,
        message: String,
    },

    /// Transport failure, timeout or an unusable response.
    #[error("{operation} failed: {reason}")]
    Unexpected {
        operation: &'static str,
        reason: String,
    },

    /// The call succeeded but the service refused the change for one tag.
    #[error("tag {tag_key} rejected: {code} - {message}")]
    Rejected {
        tag_key: String,
        code: String,
        message: String,
    },
}

/// Fatal errors of an activator run. Each ends the process with a non-zero exit code.
#[derive(Debug, Error)]
pub enum ActivatorError {
    #[error("failed to list cost allocation tags: {0}")]
    ListTags(#[source] ApiError),

    #[error("failed to activate tag {tag_key}: {source}")]
    Activate {
        tag_key: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to start backfill from {backfill_from}: {source}")]
    Backfill {
        backfill_from: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to compute backfill window: {0}")]
    Window(String),
}

impl From<time::error::ComponentRange> for ActivatorError {
    fn from(e: time::error::ComponentRange) -> Self {
        ActivatorError::Window(e.to_string())
    }
}

impl From<time::error::Format> for ActivatorError {
    fn from(e: time::error::Format) -> Self {
        ActivatorError::Window(e.to_string())
    }
}
