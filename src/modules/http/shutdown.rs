//! Graceful-shutdown trigger for `axum::serve`

use crate::{log_error, log_info};
use std::future::Future;
use std::io;

/// Resolves on Ctrl+C. When the handler cannot be installed the server keeps
/// running instead of stopping right after startup.
pub async fn shutdown_signal() {
    wait_for(tokio::signal::ctrl_c()).await
}

async fn wait_for<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => log_info!("Shutdown signal received"),
        Err(e) => {
            log_error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
