//! Diagnostics
//!
//! Structured logging through `tracing`, always written to stderr so the
//! rendered comparison on stdout stays untouched.

use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "DIFFEE_LOG";
pub const DEFAULT_LEVEL: &str = "warn";

/// Filter from `DIFFEE_LOG`, else from `level`, else the default level
pub fn build_env_filter(level: Option<&str>) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    let level = level.unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).map_err(|e| anyhow::anyhow!("Invalid log level {:?}: {}", level, e))
}

pub fn init_logging(level: Option<&str>) -> anyhow::Result<()> {
    let filter = build_env_filter(level)?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
