use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter, time::OffsetTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::logger::{
    config::LoggerConfig,
    error::LoggerError,
    format::{LogOutput, LoggerFormat},
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Install a single filtered fmt layer as the global subscriber.
pub(crate) fn install(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let layer = build_layer(cfg)?;
    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInstalled(e.to_string()))
}

pub(crate) fn build_layer(cfg: &LoggerConfig) -> Result<BoxedLayer, LoggerError> {
    let filter = build_filter(&cfg.filter)?;
    Ok(match cfg.output {
        LogOutput::Stdout => fmt_layer(cfg, std::io::stdout, filter),
        LogOutput::Stderr => fmt_layer(cfg, std::io::stderr, filter),
    })
}

fn fmt_layer<W>(cfg: &LoggerConfig, writer: W, filter: EnvFilter) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(cfg.with_targets)
        .with_timer(utc_timer());

    match cfg.format {
        LoggerFormat::Text => base.with_ansi(cfg.use_color).with_filter(filter).boxed(),
        LoggerFormat::Json => base.json().with_ansi(false).with_filter(filter).boxed(),
    }
}

fn build_filter(directives: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_new(directives).map_err(|e| LoggerError::BadFilter {
        directive: directives.to_string(),
        reason: e.to_string(),
    })
}

// Billing timestamps are all UTC; keep log timestamps on the same clock.
fn utc_timer() -> OffsetTime<Rfc3339> {
    OffsetTime::new(UtcOffset::UTC, Rfc3339)
}
