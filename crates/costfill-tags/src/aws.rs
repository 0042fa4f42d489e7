use std::future::Future;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_costexplorer::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    types::{
        CostAllocationTag as SdkTag, CostAllocationTagBackfillRequest, CostAllocationTagStatus,
        CostAllocationTagStatusEntry, CostAllocationTagType, UpdateCostAllocationTagsStatusError,
    },
};
use costfill_model::{
    BackfillJob, BackfillRecord, BackfillStatus, CostAllocationTag, PROVIDER_REGION, TagStatus,
};
use tracing::debug;

use crate::{
    api::{CostExplorerApi, TagQuery},
    error::ApiError,
};

const TARGET: &str = "costfill.tags.aws";

const OP_LIST_TAGS: &str = "ListCostAllocationTags";
const OP_LIST_HISTORY: &str = "ListCostAllocationTagBackfillHistory";
const OP_UPDATE_STATUS: &str = "UpdateCostAllocationTagsStatus";
const OP_START_BACKFILL: &str = "StartCostAllocationTagBackfill";

/// [`CostExplorerApi`] backed by AWS Cost Explorer.
#[derive(Clone, Debug)]
pub struct AwsCostExplorer {
    client: Client,
}

impl AwsCostExplorer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the default credential chain, pinned to [`PROVIDER_REGION`].
    pub async fn connect() -> Self {
        let sdk = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(PROVIDER_REGION))
            .load()
            .await;
        Self::new(Client::new(&sdk))
    }
}

#[async_trait]
impl CostExplorerApi for AwsCostExplorer {
    async fn list_tags(&self, query: &TagQuery) -> Result<Vec<CostAllocationTag>, ApiError> {
        let keys = (!query.tag_keys.is_empty()).then(|| query.tag_keys.clone());
        let tag_type = query
            .tag_type
            .map(|t| CostAllocationTagType::from(t.as_str()));

        let tags = collect_pages(|next_token| {
            let mut req = self
                .client
                .list_cost_allocation_tags()
                .set_tag_keys(keys.clone())
                .set_next_token(next_token);
            if let Some(tag_type) = tag_type.clone() {
                req = req.r#type(tag_type);
            }
            async move {
                let out = req.send().await.map_err(|e| classify(OP_LIST_TAGS, e))?;
                let page = out.cost_allocation_tags().iter().map(to_tag).collect();
                Ok((page, out.next_token().map(str::to_string)))
            }
        })
        .await?;

        debug!(target: TARGET, count = tags.len(), ?query, "listed cost allocation tags");
        Ok(tags)
    }

    async fn list_backfill_history(&self) -> Result<Vec<BackfillRecord>, ApiError> {
        let history = collect_pages(|next_token| {
            let req = self
                .client
                .list_cost_allocation_tag_backfill_history()
                .set_next_token(next_token);
            async move {
                let out = req.send().await.map_err(|e| classify(OP_LIST_HISTORY, e))?;
                let page = out.backfill_requests().iter().map(to_record).collect();
                Ok((page, out.next_token().map(str::to_string)))
            }
        })
        .await?;

        debug!(target: TARGET, count = history.len(), "listed backfill history");
        Ok(history)
    }

    async fn update_tag_status(&self, tag_key: &str, status: TagStatus) -> Result<(), ApiError> {
        let entry = CostAllocationTagStatusEntry::builder()
            .tag_key(tag_key)
            .status(CostAllocationTagStatus::from(status.as_str()))
            .build()
            .map_err(|e| ApiError::Unexpected {
                operation: OP_UPDATE_STATUS,
                reason: e.to_string(),
            })?;

        let out = self
            .client
            .update_cost_allocation_tags_status()
            .cost_allocation_tags_status(entry)
            .send()
            .await
            .map_err(|e| classify(OP_UPDATE_STATUS, e))?;

        match rejection(out.errors(), tag_key) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn start_backfill(&self, backfill_from: &str) -> Result<BackfillJob, ApiError> {
        let out = self
            .client
            .start_cost_allocation_tag_backfill()
            .backfill_from(backfill_from)
            .send()
            .await
            .map_err(|e| classify(OP_START_BACKFILL, e))?;

        out.backfill_request()
            .map(to_record)
            .ok_or_else(|| ApiError::Unexpected {
                operation: OP_START_BACKFILL,
                reason: "response carried no BackfillRequest".to_string(),
            })
    }
}

/// Drain a `NextToken`-paginated listing. `fetch` receives the token of the page to load and
/// returns that page plus the next token; an absent or empty token ends the listing.
async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<(Vec<T>, Option<String>), ApiError>>,
{
    let mut items = Vec::new();
    let mut next_token = None;
    loop {
        let (page, next) = fetch(next_token.take()).await?;
        items.extend(page);
        match next {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => return Ok(items),
        }
    }
}

/// Per-tag failures come back inside a successful update response; the first one wins.
fn rejection(errors: &[UpdateCostAllocationTagsStatusError], tag_key: &str) -> Option<ApiError> {
    errors.first().map(|rejected| ApiError::Rejected {
        tag_key: rejected.tag_key().unwrap_or(tag_key).to_string(),
        code: rejected.code().unwrap_or_default().to_string(),
        message: rejected.message().unwrap_or_default().to_string(),
    })
}

fn to_tag(tag: &SdkTag) -> CostAllocationTag {
    CostAllocationTag::new(tag.tag_key(), TagStatus::from(tag.status().as_str()))
}

fn to_record(req: &CostAllocationTagBackfillRequest) -> BackfillRecord {
    BackfillRecord {
        backfill_from: req.backfill_from().map(str::to_string),
        requested_at: req.requested_at().map(str::to_string),
        completed_at: req.completed_at().map(str::to_string),
        backfill_status: req
            .backfill_status()
            .map(|s| BackfillStatus::from(s.as_str())),
        last_updated_at: req.last_updated_at().map(str::to_string),
    }
}

fn classify<E, R>(operation: &'static str, err: SdkError<E, R>) -> ApiError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err.as_service_error() {
        Some(service) => ApiError::Provider {
            operation,
            code: service.code().unwrap_or_default().to_string(),
            message: service.message().unwrap_or_default().to_string(),
        },
        None => ApiError::Unexpected {
            operation,
            reason: DisplayErrorContext(&err).to_string(),
        },
    }
}
