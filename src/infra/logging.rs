//! File-backed logging. The TUI owns the terminal, so log lines must never
//! reach stdout while the shell is running.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

const LOG_FILE_NAME: &str = "qna.log";

/// Keeps the non-blocking writer alive; dropping it flushes pending lines.
pub struct LogGuard {
    _worker: WorkerGuard,
}

pub fn init(config: &LogConfig, layout: &StorageLayout) -> Result<LogGuard, AppError> {
    let appender = tracing_appender::rolling::never(&layout.log_dir, LOG_FILE_NAME);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(LogGuard { _worker: worker })
}
