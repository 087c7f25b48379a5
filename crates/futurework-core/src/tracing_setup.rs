use std::fs::OpenOptions;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::ENV_LOG_FILE;

/// Install file logging when `FUTUREWORK_LOG_FILE` is set.
///
/// The terminal UI owns stdout/stderr, so nothing is logged otherwise.
/// Verbosity comes from `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let Ok(log_path) = std::env::var(ENV_LOG_FILE) else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_path, e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
