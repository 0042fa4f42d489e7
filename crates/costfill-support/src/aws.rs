use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_support::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
};
use costfill_model::PROVIDER_REGION;
use tracing::debug;

use crate::{
    api::SupportApi,
    case::CaseRequest,
    error::{ProviderError, SupportCallError},
};

/// [`SupportApi`] backed by the AWS Support service.
#[derive(Clone, Debug)]
pub struct AwsSupport {
    client: Client,
}

impl AwsSupport {
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
impl SupportApi for AwsSupport {
    async fn create_case(&self, req: &CaseRequest) -> Result<String, SupportCallError> {
        debug!(target: "costfill.support.aws", subject = %req.subject, "CreateCase");
        let out = self
            .client
            .create_case()
            .subject(&req.subject)
            .service_code(&req.service_code)
            .severity_code(&req.severity_code)
            .category_code(&req.category_code)
            .communication_body(&req.communication_body)
            .language(&req.language)
            .issue_type(&req.issue_type)
            .send()
            .await
            .map_err(classify)?;

        Ok(out.case_id().unwrap_or_default().to_string())
    }
}

/// Service errors keep their code; everything else (dispatch, timeout, bad response) is
/// reported as unexpected.
fn classify<E, R>(err: SdkError<E, R>) -> SupportCallError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err.as_service_error() {
        Some(service) => ProviderError::new(
            service.code().unwrap_or_default(),
            service.message().unwrap_or_default(),
        )
        .into(),
        None => SupportCallError::Unexpected(DisplayErrorContext(&err).to_string()),
    }
}
