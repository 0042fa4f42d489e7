use std::io::IsTerminal;

use crate::logger::{
    error::LoggerError,
    format::{LogOutput, LoggerFormat},
};

pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_LOG_OUTPUT: &str = "LOG_OUTPUT";

/// Default filter: our own events at `info`, the AWS SDK and its HTTP stack only when they warn.
pub const DEFAULT_FILTER: &str =
    "info,aws_config=warn,aws_smithy_runtime=warn,aws_runtime=warn,hyper=warn,rustls=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub output: LogOutput,
    /// `EnvFilter` directives, e.g. `info` or `costfill=debug,aws_config=warn`.
    pub filter: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::Text,
            output: LogOutput::Stdout,
            filter: DEFAULT_FILTER.to_string(),
            with_targets: true,
            use_color: LogOutput::Stdout.is_terminal(),
        }
    }
}

impl LogOutput {
    fn is_terminal(self) -> bool {
        match self {
            LogOutput::Stdout => std::io::stdout().is_terminal(),
            LogOutput::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

impl LoggerConfig {
    /// Defaults overlaid with `LOG_LEVEL`, `LOG_FORMAT` and `LOG_OUTPUT`.
    pub fn from_env() -> Result<Self, LoggerError> {
        Self::default().overlay_env()
    }

    /// Same defaults, but events go to `output` unless `LOG_OUTPUT` says otherwise.
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self.use_color = output.is_terminal();
        self
    }

    pub fn overlay_env(self) -> Result<Self, LoggerError> {
        self.overlay(|key| std::env::var(key).ok())
    }

    /// Apply variables from `lookup` on top of `self`; unset or blank variables change nothing.
    pub fn overlay<F>(mut self, lookup: F) -> Result<Self, LoggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|s: &String| !s.trim().is_empty());

        if let Some(filter) = var(ENV_LOG_LEVEL) {
            self.filter = filter.trim().to_string();
        }
        if let Some(format) = var(ENV_LOG_FORMAT) {
            self.format = format.parse()?;
        }
        if let Some(output) = var(ENV_LOG_OUTPUT) {
            self = self.with_output(output.parse()?);
        }
        if self.format == LoggerFormat::Json {
            self.use_color = false;
        }
        Ok(self)
    }
}
