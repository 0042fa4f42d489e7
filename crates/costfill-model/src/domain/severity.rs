use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity code attached to a support case.
///
/// Kept as the raw provider code: the Support API is the authority on which codes an account
/// may use, so unknown values are passed through instead of rejected locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(String);

impl Severity {
    /// Codes accepted by the Support API, lowest first.
    pub const KNOWN: [&'static str; 5] = ["low", "normal", "high", "urgent", "critical"];

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the code is one of [`Severity::KNOWN`].
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::new("low")
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
