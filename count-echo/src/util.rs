use crate::Result;
use std::future::Future;
use tokio::signal::unix::{signal, SignalKind};
use tracing::debug;

/// Registers the signal handlers now and resolves on the first SIGTERM or SIGINT.
pub fn shutdown_signal() -> Result<impl Future<Output = ()>> {
    let mut sig_term = signal(SignalKind::terminate())?;
    let mut sig_int = signal(SignalKind::interrupt())?;

    Ok(async move {
        tokio::select! {
            _ = sig_term.recv() => debug!("Received SIGTERM"),
            _ = sig_int.recv() => debug!("Received SIGINT"),
        }
    })
}
