use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a cost-allocation-tag backfill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackfillStatus {
    Processing,
    Succeeded,
    Failed,
    #[serde(untagged)]
    Unknown(String),
}

impl BackfillStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BackfillStatus::Processing => "PROCESSING",
            BackfillStatus::Succeeded => "SUCCEEDED",
            BackfillStatus::Failed => "FAILED",
            BackfillStatus::Unknown(s) => s,
        }
    }

    /// Returns `true` while the provider is still working on the backfill.
    pub fn is_processing(&self) -> bool {
        matches!(self, BackfillStatus::Processing)
    }
}

impl From<&str> for BackfillStatus {
    fn from(s: &str) -> Self {
        match s {
            "PROCESSING" => BackfillStatus::Processing,
            "SUCCEEDED" => BackfillStatus::Succeeded,
            "FAILED" => BackfillStatus::Failed,
            other => BackfillStatus::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for BackfillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One backfill request as reported by the history listing or by the start call.
///
/// Every field is optional on the wire; absent fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackfillRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfill_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfill_status: Option<BackfillStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<String>,
}

impl BackfillRecord {
    pub fn is_processing(&self) -> bool {
        self.backfill_status
            .as_ref()
            .is_some_and(BackfillStatus::is_processing)
    }
}

/// Job descriptor returned when a backfill is started.
pub type BackfillJob = BackfillRecord;
