//! Logging setup.
//!
//! The terminal is owned by the TUI, so the tracing subscriber writes to a
//! log file under the config directory only. Failures are returned so the
//! caller can degrade gracefully without aborting startup.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config;

const LOG_FILE_NAME: &str = "skiff.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("No suitable directory available for logs")]
    NoLogDir,
    #[error("Failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing to write to the log file. Subsequent calls are no-ops.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let log_dir = config::config_dir()
        .map(|p| p.join("logs"))
        .ok_or(LoggingError::NoLogDir)?;
    fs::create_dir_all(&log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.clone(),
        source,
    })?;

    let file_appender = rolling::never(&log_dir, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skiff=info,sk=info"));
    let file_layer = fmt::layer().with_ansi(false).with_writer(file_writer);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    let _ = LOG_GUARD.set(guard);
    Ok(())
}
