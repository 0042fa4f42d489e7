use costfill_model::{BackfillJob, TagStatus};
use tracing::info;

use crate::{api::CostExplorerApi, error::ActivatorError, steps::TARGET};

/// Set `tag_key` to `Active`. No retry; any failure ends the run.
pub async fn activate<A>(api: &A, tag_key: &str) -> Result<(), ActivatorError>
where
    A: CostExplorerApi + ?Sized,
{
    info!(target: TARGET, "Activating tag: {tag_key}");
    api.update_tag_status(tag_key, TagStatus::Active)
        .await
        .map_err(|source| ActivatorError::Activate {
            tag_key: tag_key.to_string(),
            source,
        })
}

/// Request a cost-allocation-tag backfill starting at `backfill_from`.
pub async fn start_backfill<A>(api: &A, backfill_from: &str) -> Result<BackfillJob, ActivatorError>
where
    A: CostExplorerApi + ?Sized,
{
    info!(target: TARGET, "Starting cost allocation tag backfill from: {backfill_from}");
    api.start_backfill(backfill_from)
        .await
        .map_err(|source| ActivatorError::Backfill {
            backfill_from: backfill_from.to_string(),
            source,
        })
}
