//! Graceful shutdown on SIGINT or SIGTERM.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
    time::Duration,
};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// In-flight requests get this long to finish once a signal arrives.
const GRACE_PERIOD: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
#[error("failed to install {signal} handler: {source}")]
pub(crate) struct ShutdownSignalError {
    signal: StopSignal,
    #[source]
    source: io::Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopSignal {
    Interrupt,
    Terminate,
}

impl Display for StopSignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        })
    }
}

/// Wait for a stop signal, then stop accepting connections and drain.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    info!(%signal, grace_period_secs = GRACE_PERIOD.as_secs(), "shutting down");

    handle.stop_graceful(GRACE_PERIOD);

    Ok(())
}

async fn wait_for_signal() -> Result<StopSignal, ShutdownSignalError> {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .map(|()| StopSignal::Interrupt)
            .map_err(|source| ShutdownSignalError {
                signal: StopSignal::Interrupt,
                source,
            })
    };

    #[cfg(unix)]
    let terminate = async {
        let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(
            |source| ShutdownSignalError {
                signal: StopSignal::Terminate,
                source,
            },
        )?;

        stream.recv().await;

        Ok::<_, ShutdownSignalError>(StopSignal::Terminate)
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<StopSignal, ShutdownSignalError>>();

    tokio::select! {
        received = interrupt => received,
        received = terminate => received,
    }
}
