use std::io;
use std::path::PathBuf;

/// Failures a query can report to its caller. Per-line decode failures are
/// never one of these; a bad line is silently skipped.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("log file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("log directory not found: {0}")]
    DirectoryUnavailable(PathBuf),

    #[error("log read failed")]
    Io(#[from] io::Error),
}
