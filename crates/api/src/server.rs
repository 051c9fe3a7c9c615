//! Server bootstrap with bounded graceful shutdown.
//!
//! The listener is served on a spawned task while the caller waits for a
//! shutdown future. Once it resolves, the server stops accepting and
//! in-flight requests get a fixed window to finish before the task is aborted.

use std::future::Future;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::app::build_app;
use crate::config::ApiConfig;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("listen: {0}")]
    Io(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("in-flight requests did not finish within {0:?}")]
    DrainTimeout(Duration),
}

/// Bind `config.bind_addr`, serve the account API and stop on SIGINT/SIGTERM.
pub async fn run(config: ApiConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr.clone(),
            source,
        })?;

    tracing::info!("listening on {}", listener.local_addr()?);

    let app = build_app(&config);
    serve(listener, app, shutdown_signal(), config.shutdown_timeout).await
}

/// Serve `app` until `shutdown` resolves, then drain for at most `drain_timeout`.
///
/// Returns early with the server's own error if it stops before `shutdown`.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send,
{
    let (drain_tx, drain_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                // A dropped sender also starts the drain.
                let _ = drain_rx.await;
            })
            .await
    });

    tokio::select! {
        joined = &mut server => return Ok(joined??),
        () = shutdown => {}
    }

    tracing::info!("shutting down gracefully");
    let _ = drain_tx.send(());

    match tokio::time::timeout(drain_timeout, &mut server).await {
        Ok(joined) => {
            joined??;
            tracing::info!("server stopped");
            Ok(())
        }
        Err(_) => {
            server.abort();
            Err(ServerError::DrainTimeout(drain_timeout))
        }
    }
}

/// Log how the server stopped and return the process exit status.
pub fn report(result: &Result<(), ServerError>) -> u8 {
    match result {
        Ok(()) => {
            tracing::info!("server exiting");
            0
        }
        Err(err) => {
            tracing::error!(error = %err, "server forced to shutdown");
            1
        }
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
