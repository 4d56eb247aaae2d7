//! Debug logging support for devhooks
//!
//! When debug mode is enabled via config, events are appended to a log file.
//! Nothing is logged to stdout or stderr: both tools are used from git hooks and
//! editors that parse their output.

use crate::config::{self, LoggingConfig};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

const DEFAULT_FILTER: &str = "devhooks=debug";

/// Initialize the debug logging system
///
/// Returns the path of the log file, or None if logging is not enabled.
pub fn init_debug_logging(logging: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !logging.debug {
        return Ok(None);
    }

    let log_path = match &logging.log_file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };

    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(Some(log_path))
}

/// ~/.devhooks/devhooks.log
pub fn default_log_path() -> Result<PathBuf> {
    Ok(config::config_dir()?.join("devhooks.log"))
}
