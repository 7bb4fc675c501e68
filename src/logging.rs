use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid log filter `{filter}`: {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs the global subscriber. `RUST_LOG`, when set, wins over `level`.
pub fn init_tracing(level: &str) -> Result<(), LogError> {
    let filter = build_filter(level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| LogError::Install(e.to_string()))?;

    return Ok(());
}

fn build_filter(level: &str) -> Result<EnvFilter, LogError> {
    return EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| LogError::InvalidFilter {
            filter: level.to_string(),
            reason: e.to_string(),
        });
}
