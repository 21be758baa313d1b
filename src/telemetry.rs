//! Structured logging bootstrap.

use crate::config::{Environment, LogFormat};
use std::sync::OnceLock;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

static TRACING_INSTALLED: OnceLock<()> = OnceLock::new();

/// Error returned when the global subscriber cannot be installed.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TelemetryError(String);

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise development logs at `debug` and
/// production at `info`. Repeated calls after a successful install are
/// no-ops.
///
/// # Errors
///
/// Returns [`TelemetryError`] when another subscriber was installed outside
/// this function.
pub fn init_tracing(environment: Environment, format: LogFormat) -> Result<(), TelemetryError> {
    if TRACING_INSTALLED.get().is_some() {
        return Ok(());
    }

    let default_directive = if environment.is_production() {
        "info"
    } else {
        "debug"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|err| TelemetryError(err.to_string()))?;

    TRACING_INSTALLED.get_or_init(|| ());
    Ok(())
}
