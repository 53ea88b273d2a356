//! Process shutdown: Ctrl-C and SIGTERM cancel the run at its next step.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` on Ctrl-C, or on SIGTERM where the platform has it.
///
/// Handlers are registered before this returns, so a signal delivered right
/// after the call is not lost. Must be called inside a Tokio runtime.
pub fn cancel_on_shutdown(cancel: CancellationToken) -> std::io::Result<JoinHandle<()>> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut term = signal(SignalKind::terminate())?;
        Ok(tokio::spawn(async move {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = term.recv() => {}
            }
            tracing::warn!("shutdown signal received, stopping at next step");
            cancel.cancel();
        }))
    }
    #[cfg(not(unix))]
    {
        Ok(tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupt received, stopping at next step");
                cancel.cancel();
            }
        }))
    }
}
