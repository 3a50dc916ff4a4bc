//! File + stderr logging.
//!
//! Logs go to `<data_local_dir>/vidtube/logs/vidtube.YYYY-MM-DD.log` (daily
//! rotation) and to stderr. `RUST_LOG` overrides the default filter.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::APP_DIR;

const LOG_FILE_PREFIX: &str = "vidtube";
const DEFAULT_FILTER: &str = "vidtube=info,warn";

fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join(APP_DIR).join("logs"))
}

/// Install the global subscriber. Falls back to stderr only when the log
/// directory cannot be created.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let file_layer = log_dir()
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .map(|dir| {
            let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            // Lives as long as the process.
            Box::leak(Box::new(guard));
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
        });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    if installed.is_ok() {
        match log_dir() {
            Some(dir) => tracing::info!(dir = %dir.display(), "logging initialized"),
            None => tracing::info!("logging initialized (stderr only)"),
        }
    }
}
