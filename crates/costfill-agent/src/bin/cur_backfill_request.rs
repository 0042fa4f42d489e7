use anyhow::Context;
use serde_json::Value;
use tracing::info;

use costfill_observe::{LogOutput, LoggerConfig, logger_init};
use costfill_support::{AwsSupport, InvocationContext, RequesterConfig, handle};

/// Invoke the backfill-request handler once.
///
/// Optional first argument: the invocation event as JSON. The handler response is printed to
/// stdout; a provider error the handler does not absorb exits non-zero.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger, on stderr so stdout carries only the response
    let log = LoggerConfig::default()
        .with_output(LogOutput::Stderr)
        .overlay_env()?;
    logger_init(&log)?;

    // 2) Configuration, read once before any call
    let cfg = RequesterConfig::from_env()?;
    info!(
        export = %cfg.export_name,
        months = cfg.months,
        severity = %cfg.severity,
        "requesting CUR backfill"
    );

    let event: Value = match std::env::args().nth(1) {
        Some(raw) => serde_json::from_str(&raw).context("event argument is not valid JSON")?,
        None => Value::Null,
    };
    let ctx = InvocationContext {
        request_id: std::env::var("AWS_REQUEST_ID").ok(),
    };

    // 3) Single attempt
    let support = AwsSupport::connect().await;
    let response = handle(&support, &cfg, &event, &ctx).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
