use async_trait::async_trait;

use crate::{case::CaseRequest, error::SupportCallError};

/// The single Support API operation the requester needs.
///
/// Implemented by [`AwsSupport`](crate::AwsSupport) for real calls; tests plug in fakes.
#[async_trait]
pub trait SupportApi: Send + Sync {
    /// Open a support case and return its identifier.
    async fn create_case(&self, req: &CaseRequest) -> Result<String, SupportCallError>;
}
