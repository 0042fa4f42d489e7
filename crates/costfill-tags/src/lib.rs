//! Cost-allocation tag activation followed by a historical tag backfill.
//!
//! [`Activator::run`] walks five steps in order, each exposed on its own so it can be driven
//! against a fake [`CostExplorerApi`]:
//!
//! 1. [`check_backfill_history`]: stop early if a backfill is already processing;
//! 2. [`select_tag`]: pick the tag key to activate;
//! 3. [`activate`]: set it to `Active`;
//! 4. [`backfill_from`]: first day of the same month one year back, UTC;
//! 5. [`start_backfill`]: request the backfill.
mod activator;
pub use activator::{Activator, RunOutcome};

mod api;
pub use api::{CostExplorerApi, TagQuery};

#[cfg(feature = "aws")]
mod aws;
#[cfg(feature = "aws")]
pub use aws::AwsCostExplorer;

mod config;
pub use config::ActivatorConfig;

mod error;
pub use error::{ActivatorError, ApiError};

mod steps;
pub use steps::{
    GuardDecision, Selection, TagSelection, activate, backfill_from, check_backfill_history,
    select_tag, start_backfill,
};

#[cfg(test)]
mod testing;
