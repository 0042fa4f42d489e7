use crate::config::RequesterConfig;

pub const SERVICE_CODE: &str = "service-cost-and-usage-report-cur";
pub const CATEGORY_CODE: &str = "backfill-a-report";
pub const ISSUE_TYPE: &str = "customer-service";
pub const LANGUAGE: &str = "en";

/// Parameters of a `CreateCase` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRequest {
    pub subject: String,
    pub service_code: String,
    pub severity_code: String,
    pub category_code: String,
    pub communication_body: String,
    pub language: String,
    pub issue_type: String,
}

impl CaseRequest {
    /// Case asking AWS Support to backfill `cfg.months` months into the configured export.
    pub fn backfill(cfg: &RequesterConfig) -> Self {
        let name = &cfg.export_name;
        let months = cfg.months;

        Self {
            subject: format!("Request historical data backfill for CUR 2.0 export '{name}'"),
            service_code: SERVICE_CODE.to_string(),
            severity_code: cfg.severity.as_str().to_string(),
            category_code: CATEGORY_CODE.to_string(),
            communication_body: format!(
                "Hello AWS Support,\n\n\
                 Please backfill {months} months of historical Cost and Usage Report data \
                 into the CUR 2.0 export named '{name}'.\n\n\
                 This export was created using AWS BCM Data Exports (CUR 2.0) and stores \
                 data in Parquet format.\n\n\
                 Thank you!"
            ),
            language: LANGUAGE.to_string(),
            issue_type: ISSUE_TYPE.to_string(),
        }
    }
}
