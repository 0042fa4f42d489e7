use costfill_model::Severity;

use crate::error::ConfigError;

pub const ENV_EXPORT_NAME: &str = "EXPORT_NAME";
pub const ENV_BACKFILL_MONTHS: &str = "BACKFILL_MONTHS";
pub const ENV_SEVERITY: &str = "SEVERITY";

pub const DEFAULT_EXPORT_NAME: &str = "unknown-export";
pub const DEFAULT_BACKFILL_MONTHS: u32 = 12;

/// Inputs of a backfill request, read once before any API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequesterConfig {
    /// Name of the CUR 2.0 export to backfill.
    pub export_name: String,
    /// How many months of history to request.
    pub months: u32,
    pub severity: Severity,
}

impl Default for RequesterConfig {
    fn default() -> Self {
        Self {
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            months: DEFAULT_BACKFILL_MONTHS,
            severity: Severity::default(),
        }
    }
}

impl RequesterConfig {
    /// Read `EXPORT_NAME`, `BACKFILL_MONTHS` and `SEVERITY` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(name) = lookup(ENV_EXPORT_NAME) {
            cfg.export_name = name;
        }
        if let Some(raw) = lookup(ENV_BACKFILL_MONTHS) {
            cfg.months = parse_months(&raw)?;
        }
        if let Some(code) = lookup(ENV_SEVERITY) {
            cfg.severity = Severity::new(code);
        }
        Ok(cfg)
    }
}

fn parse_months(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidMonths(raw.to_string())),
        Ok(n) => Ok(n),
    }
}
