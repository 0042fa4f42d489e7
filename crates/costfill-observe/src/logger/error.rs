use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("unknown log format {0:?}; use text or json")]
    UnknownFormat(String),

    #[error("unknown log output {0:?}; use stdout or stderr")]
    UnknownOutput(String),

    #[error("bad log filter {directive:?}: {reason}")]
    BadFilter { directive: String, reason: String },

    /// Another subscriber (or `log` bridge) owns the process already.
    #[error("a global log subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}
