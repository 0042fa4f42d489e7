mod domain;
pub use domain::*;

/// Region every billing call is pinned to.
///
/// AWS Support and Cost Explorer only serve their control APIs out of `us-east-1`.
pub const PROVIDER_REGION: &str = "us-east-1";
