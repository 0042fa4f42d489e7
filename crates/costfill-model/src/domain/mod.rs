mod backfill;
mod response;
mod severity;
mod tag;

pub use backfill::{BackfillJob, BackfillRecord, BackfillStatus};
pub use response::{HandlerResponse, ResponseBody};
pub use severity::Severity;
pub use tag::{CostAllocationTag, TagStatus, TagType};
