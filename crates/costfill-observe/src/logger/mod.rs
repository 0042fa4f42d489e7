mod config;
mod error;
mod format;
mod log;

pub use config::{DEFAULT_FILTER, LoggerConfig};
pub use error::LoggerError;
pub use format::{LogOutput, LoggerFormat};

/// Install the global `tracing` subscriber described by `cfg`.
///
/// Can only succeed once per process; a second call returns [`LoggerError::AlreadyInstalled`].
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    log::install(cfg)
}
