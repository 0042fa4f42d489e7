//! In-memory [`CostExplorerApi`] used by the unit tests.
use std::sync::Mutex;

use async_trait::async_trait;
use costfill_model::{
    BackfillJob, BackfillRecord, BackfillStatus, CostAllocationTag, TagStatus, TagType,
};

use crate::{api::CostExplorerApi, api::TagQuery, error::ApiError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListTags(TagQuery),
    ListHistory,
    UpdateStatus(String, TagStatus),
    StartBackfill(String),
}

pub struct FakeCostExplorer {
    /// Listed in this order, each with its type.
    pub tags: Vec<(CostAllocationTag, TagType)>,
    pub history: Result<Vec<BackfillRecord>, ApiError>,
    pub list_tags_error: Option<ApiError>,
    pub update_error: Option<ApiError>,
    pub start_error: Option<ApiError>,
    calls: Mutex<Vec<Call>>,
}

impl FakeCostExplorer {
    /// AWS-generated tags in listing order.
    pub fn with_tags(tags: &[(&str, TagStatus)]) -> Self {
        Self {
            tags: tags
                .iter()
                .map(|(k, s)| (CostAllocationTag::new(*k, s.clone()), TagType::AwsGenerated))
                .collect(),
            history: Ok(Vec::new()),
            list_tags_error: None,
            update_error: None,
            start_error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Append a user-defined tag after the existing ones.
    pub fn with_user_tag(mut self, key: &str, status: TagStatus) -> Self {
        self.tags
            .push((CostAllocationTag::new(key, status), TagType::UserDefined));
        self
    }

    pub fn with_history(mut self, statuses: &[&str]) -> Self {
        self.history = Ok(statuses
            .iter()
            .map(|s| BackfillRecord {
                backfill_status: Some(BackfillStatus::from(*s)),
                ..Default::default()
            })
            .collect());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn provider_error(operation: &'static str, code: &str) -> ApiError {
    ApiError::Provider {
        operation,
        code: code.to_string(),
        message: "boom".to_string(),
    }
}

#[async_trait]
impl CostExplorerApi for FakeCostExplorer {
    async fn list_tags(&self, query: &TagQuery) -> Result<Vec<CostAllocationTag>, ApiError> {
        self.record(Call::ListTags(query.clone()));
        if let Some(err) = &self.list_tags_error {
            return Err(err.clone());
        }
        Ok(self
            .tags
            .iter()
            .filter(|(_, ty)| query.tag_type.is_none_or(|want| want == *ty))
            .filter(|(t, _)| query.tag_keys.is_empty() || query.tag_keys.contains(&t.tag_key))
            .map(|(t, _)| t.clone())
            .collect())
    }

    async fn list_backfill_history(&self) -> Result<Vec<BackfillRecord>, ApiError> {
        self.record(Call::ListHistory);
        self.history.clone()
    }

    async fn update_tag_status(&self, tag_key: &str, status: TagStatus) -> Result<(), ApiError> {
        self.record(Call::UpdateStatus(tag_key.to_string(), status));
        match &self.update_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn start_backfill(&self, backfill_from: &str) -> Result<BackfillJob, ApiError> {
        self.record(Call::StartBackfill(backfill_from.to_string()));
        if let Some(err) = &self.start_error {
            return Err(err.clone());
        }
        Ok(BackfillJob {
            backfill_from: Some(backfill_from.to_string()),
            requested_at: Some("2025-06-15T10:00:00Z".to_string()),
            backfill_status: Some(BackfillStatus::Processing),
            ..Default::default()
        })
    }
}
