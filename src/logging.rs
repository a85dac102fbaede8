//! File logging bootstrap.
//!
//! Standard output is the interactive surface, so diagnostics go to
//! size-rotated files only. Events use a `key=value` layout:
//! `event=todo_added module=presenter todo_id=...`.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "todo-console";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Errors raised while starting the logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The requested level is not one of the supported names.
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnsupportedLevel(String),

    /// The log directory could not be created.
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        /// Directory that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The logger backend refused to start.
    #[error("failed to start logger: {0}")]
    Start(#[from] FlexiLoggerError),
}

/// Starts file logging at `level` under `log_dir`.
///
/// Logging stops when the returned handle is dropped; keep it alive for
/// the lifetime of the program.
///
/// # Errors
///
/// Returns [`LoggingError`] when the level is unknown, the directory cannot
/// be created, or the backend fails to start.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle, LoggingError> {
    let normalized_level = normalize_level(level)?;
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let handle = Logger::try_with_str(normalized_level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=app_start module=logging status=ok version={} level={normalized_level} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(handle)
}

/// Maps user-supplied level names onto the names the backend accepts.
///
/// # Errors
///
/// Returns [`LoggingError::UnsupportedLevel`] for unknown names.
pub fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_owned())),
    }
}
