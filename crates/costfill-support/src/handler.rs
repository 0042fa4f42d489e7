use costfill_model::{HandlerResponse, ResponseBody};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    api::SupportApi,
    case::CaseRequest,
    config::RequesterConfig,
    error::{ProviderError, SupportCallError},
};

const TARGET: &str = "costfill.support";

/// Metadata of the invocation, used only to tag log lines.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    pub request_id: Option<String>,
}

/// Error codes meaning the account cannot open support cases (no paid plan or missing IAM
/// permission). Expected for many callers, so they end the run as a skip rather than a failure.
pub fn is_access_denial(code: &str) -> bool {
    matches!(code, "SubscriptionRequiredException" | "AccessDeniedException")
        || code.contains("AccessDenied")
}

/// Open one support case requesting a historical backfill of `cfg.export_name`.
///
/// Outcomes:
/// - case created: `200`, `{success, caseId, message}`;
/// - access denied / no subscription: `200`, `{success, skipped, reason, message}`;
/// - non-provider failure: `500`, `{success: false, error}`;
/// - any other provider error: returned as `Err` for the invoker to deal with.
///
/// The event payload is accepted for interface compatibility and ignored.
pub async fn handle<A>(
    api: &A,
    cfg: &RequesterConfig,
    _event: &Value,
    ctx: &InvocationContext,
) -> Result<HandlerResponse, ProviderError>
where
    A: SupportApi + ?Sized,
{
    let request_id = ctx.request_id.as_deref().unwrap_or("-");
    if !cfg.severity.is_known() {
        warn!(target: TARGET, request_id, severity = %cfg.severity, "severity is not a known support code; sending as-is");
    }

    let req = CaseRequest::backfill(cfg);
    match api.create_case(&req).await {
        Ok(case_id) => {
            info!(target: TARGET, request_id, %case_id, "Successfully created support case: {case_id}");
            let body = ResponseBody::created(
                case_id.as_str(),
                format!(
                    "Support case {case_id} created for {} months backfill",
                    cfg.months
                ),
            );
            Ok(HandlerResponse::new(200, &body))
        }
        Err(SupportCallError::Provider(err)) if is_access_denial(&err.code) => {
            warn!(target: TARGET, request_id, code = %err.code, "Support access not available: {err}");
            let body = ResponseBody::skipped(
                err.code.as_str(),
                format!(
                    "Support case creation skipped: {}. Open a case manually or upgrade support plan.",
                    err.message
                ),
            );
            Ok(HandlerResponse::new(200, &body))
        }
        Err(SupportCallError::Provider(err)) => {
            error!(target: TARGET, request_id, code = %err.code, "Error creating support case: {err}");
            Err(err)
        }
        Err(SupportCallError::Unexpected(reason)) => {
            error!(target: TARGET, request_id, "Unexpected error: {reason}");
            Ok(HandlerResponse::new(500, &ResponseBody::failed(reason)))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use costfill_model::Severity;

    use super::*;

    enum Reply {
        Case(&'static str),
        Provider(&'static str, &'static str),
        Unexpected(&'static str),
    }

    struct FakeSupport {
        reply: Reply,
        calls: Mutex<Vec<CaseRequest>>,
    }

    impl FakeSupport {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<CaseRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SupportApi for FakeSupport {
        async fn create_case(&self, req: &CaseRequest) -> Result<String, SupportCallError> {
            self.calls.lock().unwrap().push(req.clone());
            match self.reply {
                Reply::Case(id) => Ok(id.to_string()),
                Reply::Provider(code, msg) => Err(ProviderError::new(code, msg).into()),
                Reply::Unexpected(reason) => Err(SupportCallError::Unexpected(reason.into())),
            }
        }
    }

    async fn run(api: &FakeSupport, cfg: &RequesterConfig) -> Result<HandlerResponse, ProviderError> {
        handle(api, cfg, &Value::Null, &InvocationContext::default()).await
    }

    #[tokio::test]
    async fn created_case_returns_id() {
        let api = FakeSupport::new(Reply::Case("case-123"));
        let resp = run(&api, &RequesterConfig::default()).await.unwrap();

        assert_eq!(resp.status_code, 200);
        let body = resp.parse_body().unwrap();
        assert!(body.success);
        assert_eq!(body.case_id.as_deref(), Some("case-123"));
        assert_eq!(
            body.message.as_deref(),
            Some("Support case case-123 created for 12 months backfill")
        );
        assert_eq!(body.skipped, None);
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn access_denials_are_skipped() {
        for code in [
            "SubscriptionRequiredException",
            "AccessDeniedException",
            "AccessDenied",
            "Support.AccessDeniedForAccount",
        ] {
            let api = FakeSupport::new(Reply::Provider(code, "no premium support"));
            let resp = run(&api, &RequesterConfig::default()).await.unwrap();

            assert_eq!(resp.status_code, 200, "{code}");
            let body = resp.parse_body().unwrap();
            assert!(body.success);
            assert!(body.is_skipped());
            assert_eq!(body.reason.as_deref(), Some(code));
            assert_eq!(
                body.message.as_deref(),
                Some(
                    "Support case creation skipped: no premium support. Open a case manually or upgrade support plan."
                )
            );
            assert_eq!(api.calls().len(), 1);
        }
    }

    #[tokio::test]
    async fn other_provider_errors_propagate_unchanged() {
        for code in ["ThrottlingException", "CaseCreationLimitExceeded", "accessdenied", ""] {
            let api = FakeSupport::new(Reply::Provider(code, "boom"));
            let err = run(&api, &RequesterConfig::default()).await.unwrap_err();
            assert_eq!(err, ProviderError::new(code, "boom"));
        }
    }

    #[tokio::test]
    async fn unexpected_errors_become_500() {
        let api = FakeSupport::new(Reply::Unexpected("dispatch failure: connection refused"));
        let resp = run(&api, &RequesterConfig::default()).await.unwrap();

        assert_eq!(resp.status_code, 500);
        let body = resp.parse_body().unwrap();
        assert!(!body.success);
        assert_eq!(
            body.error.as_deref(),
            Some("dispatch failure: connection refused")
        );
        assert_eq!(body.case_id, None);
    }

    #[tokio::test]
    async fn body_mentions_configured_months() {
        let env = |pairs: &[(&str, &str)]| {
            let map: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            RequesterConfig::from_lookup(move |k| map.get(k).cloned()).unwrap()
        };

        let api = FakeSupport::new(Reply::Case("c"));
        run(&api, &env(&[])).await.unwrap();
        run(&api, &env(&[("BACKFILL_MONTHS", "6")])).await.unwrap();

        let calls = api.calls();
        assert!(calls[0].communication_body.contains("backfill 12 months"));
        assert!(calls[1].communication_body.contains("backfill 6 months"));
    }

    #[tokio::test]
    async fn unknown_severity_is_still_sent() {
        let cfg = RequesterConfig {
            severity: Severity::new("sev-1"),
            ..Default::default()
        };
        let api = FakeSupport::new(Reply::Provider("InvalidParameterValueException", "bad severity"));
        assert!(run(&api, &cfg).await.is_err());
        assert_eq!(api.calls()[0].severity_code, "sev-1");
    }

    #[test]
    fn denial_classification() {
        assert!(is_access_denial("SubscriptionRequiredException"));
        assert!(is_access_denial("AccessDeniedException"));
        assert!(is_access_denial("xAccessDeniedy"));
        assert!(!is_access_denial("accessDenied"));
        assert!(!is_access_denial("ThrottlingException"));
        assert!(!is_access_denial(""));
    }
}
