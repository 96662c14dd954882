//! Logging setup.
//!
//! The terminal belongs to the UI, so logs go to a file through a
//! non-blocking writer. The filter comes from `VIMLET_LOG` and defaults to
//! `warn`.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "VIMLET_LOG";

/// Installs the global file subscriber writing to `log_path`.
///
/// Returns the writer guard, which must stay alive for buffered lines to be
/// flushed. Returns `None` if the log directory can't be created or a global
/// subscriber is already installed; logging is never fatal.
pub fn init_logging(log_path: &Path) -> Option<WorkerGuard> {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_path.file_name()?;
    fs::create_dir_all(dir).ok()?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|_| guard)
}
