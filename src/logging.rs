use crate::config::LoggingConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "support_directory=info";

/// Initializes console logging, plus a daily-rotated JSON log file when
/// `log_dir` is configured. Keep the returned guard alive until exit so
/// buffered file output is flushed.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stdout);

    let mut dir_error = None;
    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => match fs::create_dir_all(dir) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(dir, "support_directory.log");
                let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
                let layer = fmt::layer().json().with_writer(non_blocking_writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                dir_error = Some((dir, e));
                (None, None)
            }
        },
        None => (None, None),
    };

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if let Some((dir, e)) = dir_error {
        tracing::warn!(
            "Could not create log directory {}, logging to console only: {}",
            dir.display(),
            e
        );
    }

    guard
}
