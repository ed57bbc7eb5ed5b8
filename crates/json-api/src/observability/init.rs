//! Observability lifecycle.

use thiserror::Error;

use crate::config::ServerConfig;

use super::{logging, settings};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
#[error("failed to initialise tracing subscriber: {0}")]
pub(crate) struct ObservabilityError(#[from] tracing_subscriber::util::TryInitError);

/// Marker that logging and request settings are installed.
#[derive(Debug)]
pub(crate) struct Observability;

impl Observability {
    /// Apply request observability settings and install the global subscriber.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::set_slow_request_threshold_ms(config.logging.slow_request_threshold_ms);
        logging::install(&config.logging)?;

        Ok(Self)
    }
}
