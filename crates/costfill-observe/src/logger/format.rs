use std::str::FromStr;

use crate::logger::error::LoggerError;

/// Line format of emitted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggerFormat {
    /// Human-readable, one event per line.
    #[default]
    Text,
    /// One JSON object per line, for log stores that index fields.
    Json,
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(LoggerFormat::Text),
            "json" => Ok(LoggerFormat::Json),
            _ => Err(LoggerError::UnknownFormat(s.to_string())),
        }
    }
}

/// Stream events are written to.
///
/// The tag backfill prints its log and its final result on stdout. The backfill request prints
/// its response on stdout, so its log is usually moved to stderr to keep that output parseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogOutput {
    #[default]
    Stdout,
    Stderr,
}

impl FromStr for LogOutput {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" | "out" => Ok(LogOutput::Stdout),
            "stderr" | "err" => Ok(LogOutput::Stderr),
            _ => Err(LoggerError::UnknownOutput(s.to_string())),
        }
    }
}
