use async_trait::async_trait;
use costfill_model::{BackfillJob, BackfillRecord, CostAllocationTag, TagStatus, TagType};

use crate::error::ApiError;

/// Filter for [`CostExplorerApi::list_tags`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    /// Restrict to these keys; empty means all keys.
    pub tag_keys: Vec<String>,
    pub tag_type: Option<TagType>,
}

impl TagQuery {
    /// All tags of one type.
    pub fn of_type(tag_type: TagType) -> Self {
        Self {
            tag_keys: Vec::new(),
            tag_type: Some(tag_type),
        }
    }

    /// A single key of one type.
    pub fn key(tag_key: impl Into<String>, tag_type: TagType) -> Self {
        Self {
            tag_keys: vec![tag_key.into()],
            tag_type: Some(tag_type),
        }
    }
}

/// Cost Explorer operations used by the activator.
///
/// Listings return every page, in provider order.
#[async_trait]
pub trait CostExplorerApi: Send + Sync {
    async fn list_tags(&self, query: &TagQuery) -> Result<Vec<CostAllocationTag>, ApiError>;

    async fn list_backfill_history(&self) -> Result<Vec<BackfillRecord>, ApiError>;

    async fn update_tag_status(&self, tag_key: &str, status: TagStatus) -> Result<(), ApiError>;

    /// Start a backfill covering `backfill_from` (RFC 3339, UTC) up to now.
    async fn start_backfill(&self, backfill_from: &str) -> Result<BackfillJob, ApiError>;
}
