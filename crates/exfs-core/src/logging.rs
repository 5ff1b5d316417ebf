//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;
use crate::platform::Platform;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "EXFS_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/exfs/logs/` so they never interleave
/// with the output of interactive child processes.
/// Log level is controlled by the `EXFS_LOG` environment variable.
///
/// # Examples
/// ```bash
/// EXFS_LOG=debug exfs locate .tool-versions
/// EXFS_LOG=trace exfs edit notes.md
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "exfs.log");

    // Default to info, allow override via EXFS_LOG
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("exfs=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    let platform = Platform::current()
        .map(|p| p.to_string())
        .unwrap_or_else(|e| e.to_string());
    tracing::info!(
        "exfs starting on {}, log directory: {}",
        platform,
        log_dir.display()
    );

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("exfs").join("logs")
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join("exfs.log")
}
