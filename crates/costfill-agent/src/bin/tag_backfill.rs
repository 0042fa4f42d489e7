use time::OffsetDateTime;
use tracing::info;

use costfill_model::PROVIDER_REGION;
use costfill_observe::{LoggerConfig, logger_init};
use costfill_tags::{Activator, ActivatorConfig, AwsCostExplorer, RunOutcome};

/// Activate a cost-allocation tag and start a one-year tag backfill.
///
/// Exits 0 when the backfill was submitted or one is already processing, 1 on any failure.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger_init(&LoggerConfig::from_env()?)?;

    let cfg = ActivatorConfig::from_env();
    info!(default_tag = %cfg.default_tag_key, region = PROVIDER_REGION, "tag backfill starting");

    let activator = Activator::new(AwsCostExplorer::connect().await, cfg);
    match activator.run(OffsetDateTime::now_utc()).await? {
        RunOutcome::AlreadyProcessing => info!("nothing to do"),
        RunOutcome::Submitted { tag_key, job, .. } => {
            info!(%tag_key, "backfill submitted");
            let printed = serde_json::json!({ "BackfillRequest": job });
            println!("{}", serde_json::to_string_pretty(&printed)?);
        }
    }
    Ok(())
}
