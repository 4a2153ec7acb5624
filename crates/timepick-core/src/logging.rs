//! File logging through tracing
//!
//! Stdout carries the headless NDJSON stream, so every log line goes to a
//! daily rolled file under the platform data directory instead.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "TIMEPICK_LOG";

/// Filter used when `TIMEPICK_LOG` is unset or malformed
pub const DEFAULT_FILTER: &str = "timepick=info,warn";

const LOG_FILE_PREFIX: &str = "timepick.log";

/// Install the global subscriber.
///
/// ```bash
/// TIMEPICK_LOG=timepick_app=debug timepick run
/// ```
pub fn init() -> Result<()> {
    let dir = log_directory();
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_timer(fmt::time::ChronoLocal::new("%H:%M:%S%.3f".to_string())),
        )
        .init();

    tracing::info!("Logging to {}", dir.display());
    Ok(())
}

/// `<data dir>/timepick/logs`, or `./timepick/logs` without a data dir
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("timepick")
        .join("logs")
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
