use costfill_model::BackfillJob;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use crate::{
    api::CostExplorerApi,
    config::ActivatorConfig,
    error::ActivatorError,
    steps::{self, GuardDecision},
};

/// How a run ended when nothing failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "outcome")]
pub enum RunOutcome {
    /// A backfill was already processing; no tag was touched.
    AlreadyProcessing,
    Submitted {
        tag_key: String,
        backfill_from: String,
        job: BackfillJob,
    },
}

/// Activates a cost-allocation tag and starts a one-year tag backfill.
pub struct Activator<A> {
    api: A,
    cfg: ActivatorConfig,
}

impl<A> Activator<A>
where
    A: CostExplorerApi,
{
    pub fn new(api: A, cfg: ActivatorConfig) -> Self {
        Self { api, cfg }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Run all steps once. `now` anchors the backfill window.
    pub async fn run(&self, now: OffsetDateTime) -> Result<RunOutcome, ActivatorError> {
        if steps::check_backfill_history(&self.api).await == GuardDecision::AlreadyProcessing {
            return Ok(RunOutcome::AlreadyProcessing);
        }

        let selection =
            steps::select_tag(&self.api, &self.cfg.default_tag_key, self.cfg.tag_type).await?;
        info!(target: steps::TARGET, tag_key = %selection.tag_key, reason = ?selection.reason, "tag selected");

        steps::activate(&self.api, &selection.tag_key).await?;

        let backfill_from = steps::backfill_from(now)?;
        let job = steps::start_backfill(&self.api, &backfill_from).await?;

        Ok(RunOutcome::Submitted {
            tag_key: selection.tag_key,
            backfill_from,
            job,
        })
    }
}
