//! Server bootstrap: configuration, logging, storage and graceful shutdown.

use crate::config::AppConfig;
use crate::http::{AppState, router};
use crate::task::{
    adapters::sqlite::{DatabaseError, SqliteTaskRepository, open_database},
    services::TaskUseCases,
};
use crate::telemetry::{TelemetryError, init_tracing};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Logging could not be initialised.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    /// The database could not be opened or migrated.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Binding or serving the socket failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the HTTP server until a shutdown signal arrives.
///
/// The database pool is created here and released once the server has
/// drained its connections.
///
/// # Errors
///
/// Returns [`ServerError`] when startup fails or the listener errors.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    init_tracing(config.environment, config.log_format)?;

    let pool = open_database(&config.database_url, config.effective_max_connections())?;
    let repository = Arc::new(SqliteTaskRepository::new(pool));
    let use_cases = TaskUseCases::new(repository, Arc::new(DefaultClock));
    let app = router(AppState::new(use_cases, config.environment));

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(
        address = %listener.local_addr()?,
        environment = %config.environment,
        database = %config.database_url,
        "tasks API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped, database connections released");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received, draining connections");
}
