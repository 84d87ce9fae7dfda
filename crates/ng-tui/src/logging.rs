//! File logging
//!
//! The terminal belongs to the UI while a game runs, so tracing output goes
//! to a log file through a non-blocking writer.

use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Default log file: `<data dir>/numguess/numguess.log`
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("numguess")
        .join("numguess.log")
}

/// Log level for the verbosity flag
pub fn log_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Install the global subscriber writing to `path`.
///
/// Returns the writer guard, which must live until exit so buffered lines
/// are flushed. Returns `None` if the file cannot be opened; the game then
/// runs without logs.
pub fn init_logging(path: &Path, verbose: bool) -> Option<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name()?.to_string_lossy().into_owned();

    std::fs::create_dir_all(dir).ok()?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .try_init()
        .ok()?;

    Some(guard)
}
