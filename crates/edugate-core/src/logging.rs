//! File-based tracing setup.
//!
//! The TUI owns the terminal, so diagnostics go to
//! `$EDUGATE_HOME/logs/edugate.log` instead of stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directives.
pub const LOG_FILTER_ENV: &str = "EDUGATE_LOG";

const LOG_FILE_NAME: &str = "edugate.log";
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to `dir/edugate.log`.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// whole process.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
