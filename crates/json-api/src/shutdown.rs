//! Graceful shutdown

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownError {
    #[error("failed to listen for {signal}: {source}")]
    Install {
        signal: &'static str,
        #[source]
        source: io::Error,
    },
}

async fn ctrl_c() -> Result<&'static str, ShutdownError> {
    signal::ctrl_c()
        .await
        .map_err(|source| ShutdownError::Install {
            signal: "ctrl_c",
            source,
        })?;

    Ok("ctrl_c")
}

#[cfg(unix)]
async fn terminate() -> Result<&'static str, ShutdownError> {
    let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(
        |source| ShutdownError::Install {
            signal: "SIGTERM",
            source,
        },
    )?;

    stream.recv().await;

    Ok("SIGTERM")
}

#[cfg(not(unix))]
async fn terminate() -> Result<&'static str, ShutdownError> {
    std::future::pending().await
}

/// Wait for Ctrl+C or SIGTERM, then let in-flight requests finish.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownError> {
    let received = tokio::select! {
        result = ctrl_c() => result?,
        result = terminate() => result?,
    };

    info!(signal = received, "shutting down");

    handle.stop_graceful(None);

    Ok(())
}
