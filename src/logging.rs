use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Sends structured logs to `path`. The TUI owns stdout and stderr, so there
/// is no console subscriber; without a log file nothing is recorded.
///
/// Verbosity comes from `RUST_LOG`, defaulting to `info`.
pub fn init(path: &Path) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::Logging(format!("{}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
