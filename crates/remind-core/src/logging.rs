//! File logging.
//!
//! The terminal belongs to the TUI, so logs go to a daily rolling file under
//! the logs directory. `REMIND_LOG` (an `EnvFilter` directive) overrides the
//! configured level.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "REMIND_LOG";

const LOG_FILE_PREFIX: &str = "remind.log";

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn init(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter(default_level))
            .with_context(|| format!("Invalid log level: {default_level}"))?,
    };

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install logger: {err}"))?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
    Ok(guard)
}

/// Our crates at `level`, dependencies at `warn`.
fn default_filter(level: &str) -> String {
    let level = level.trim();
    let level = if level.is_empty() { "info" } else { level };
    format!("warn,remind_core={level},remind_tui={level},remind={level}")
}
