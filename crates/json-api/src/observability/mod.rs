//! Logging, request tracing and Prometheus metrics.

mod init;
mod logging;
mod metrics;
mod request;
mod settings;

pub(crate) use init::Observability;
pub(crate) use metrics::{metrics_handler, record_saved_item_conflict};
pub(crate) use request::request_logging;
