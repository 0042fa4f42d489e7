use tracing::{info, warn};

use crate::{api::CostExplorerApi, steps::TARGET};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    /// A backfill is already running; nothing to do this time.
    AlreadyProcessing,
}

/// Best-effort check that no backfill is in flight.
///
/// A failed history listing is logged and treated as [`GuardDecision::Proceed`]. This is not a
/// lock: two concurrent runs can both pass it.
pub async fn check_backfill_history<A>(api: &A) -> GuardDecision
where
    A: CostExplorerApi + ?Sized,
{
    info!(target: TARGET, "Checking for existing backfills...");
    match api.list_backfill_history().await {
        Ok(history) if history.iter().any(|r| r.is_processing()) => {
            info!(target: TARGET, "A backfill is already processing. Skipping new request.");
            GuardDecision::AlreadyProcessing
        }
        Ok(history) => {
            info!(target: TARGET, entries = history.len(), "no backfill in progress");
            GuardDecision::Proceed
        }
        Err(e) => {
            warn!(target: TARGET, "Could not list backfill history: {e}");
            GuardDecision::Proceed
        }
    }
}
