mod guard;
mod select;
mod submit;
mod window;

pub use guard::{GuardDecision, check_backfill_history};
pub use select::{Selection, TagSelection, select_tag};
pub use submit::{activate, start_backfill};
pub use window::backfill_from;

pub(crate) const TARGET: &str = "costfill.tags";
