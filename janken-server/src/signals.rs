// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use tokio::signal::unix::signal;
use tokio::signal::unix::SignalKind;

/// Resolves on the first SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let mut sig_term = match signal(SignalKind::terminate()) {
        Ok(sig_term) => sig_term,
        Err(err) => {
            tracing::error!("Failed to install SIGTERM handler: {err}");
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for SIGINT: {err}");
            }
            return;
        }
    };
    tokio::select! {
        _ = tokio::signal::ctrl_c() => tracing::warn!("Received SIGINT signal"),
        _ = sig_term.recv() => tracing::warn!("Received SIGTERM signal"),
    }
}
