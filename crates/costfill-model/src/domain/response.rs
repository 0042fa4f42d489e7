use serde::{Deserialize, Serialize};

/// Result payload of a single backfill-request invocation.
///
/// Serialized into [`HandlerResponse::body`]. Absent fields are omitted, so the three outcomes
/// produce three distinct shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseBody {
    /// A support case was opened.
    pub fn created(case_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            case_id: Some(case_id.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Case creation was not possible for an expected reason (no support plan, denied access).
    pub fn skipped(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            skipped: Some(true),
            reason: Some(reason.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.unwrap_or(false)
    }
}

/// HTTP-style envelope returned by the invocation entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    /// JSON-encoded [`ResponseBody`].
    pub body: String,
}

impl HandlerResponse {
    /// Wrap `body` in an envelope.
    ///
    /// Never fails: if the body cannot be encoded the envelope becomes a `500` carrying the
    /// encoding error.
    pub fn new(status_code: u16, body: &ResponseBody) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self { status_code, body },
            Err(e) => Self::encode_failure(&e),
        }
    }

    fn encode_failure(err: &serde_json::Error) -> Self {
        let body = serde_json::json!({ "success": false, "error": err.to_string() });
        Self {
            status_code: 500,
            body: body.to_string(),
        }
    }

    /// Decode the body back into its structured form.
    pub fn parse_body(&self) -> Result<ResponseBody, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_body_shape() {
        let body = ResponseBody::created("case-1", "done");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"success":true,"caseId":"case-1","message":"done"}"#);
    }

    #[test]
    fn skipped_body_shape() {
        let body = ResponseBody::skipped("AccessDeniedException", "nope");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            r#"{"success":true,"skipped":true,"reason":"AccessDeniedException","message":"nope"}"#
        );
        assert!(body.is_skipped());
    }

    #[test]
    fn failed_body_shape() {
        let body = ResponseBody::failed("boom");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"boom"}"#);
        assert!(!body.is_skipped());
    }

    #[test]
    fn envelope_uses_status_code_key() {
        let resp = HandlerResponse::new(500, &ResponseBody::failed("boom"));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["statusCode"], 500);
        assert_eq!(resp.parse_body().unwrap(), ResponseBody::failed("boom"));
    }

    #[test]
    fn encoding_failure_becomes_500_body() {
        let err = serde_json::from_str::<ResponseBody>("{").unwrap_err();
        let resp = HandlerResponse::encode_failure(&err);

        assert_eq!(resp.status_code, 500);
        let body = resp.parse_body().unwrap();
        assert!(!body.success);
        assert_eq!(body.error, Some(err.to_string()));
    }
}
