//! Log file discovery.
//! Handles the date-partitioned naming convention and directory listing.

use std::fs;
use std::path::PathBuf;

use crate::error::QueryError;

pub const FILE_PREFIX: &str = "app-";
pub const FILE_SUFFIX: &str = ".log";

/// Ephemeral handle for one date-partitioned file. Lives only for the
/// duration of a single query.
#[derive(Debug, Clone, PartialEq)]
pub struct LogFile {
    pub path: PathBuf,
    pub date: String,
}

/// Resolves the configured log directory into the set of per-date files.
/// The directory is injected explicitly; the catalog never reads ambient
/// configuration.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    dir: PathBuf,
}

impl FileCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// List every file matching the `app-YYYY-MM-DD.log` convention, in
    /// ascending date order. A missing or unlistable directory, or one with
    /// no matching files, is `DirectoryUnavailable`.
    pub fn available_files(&self) -> Result<Vec<LogFile>, QueryError> {
        let entries = fs::read_dir(&self.dir)
            .map_err(|_| QueryError::DirectoryUnavailable(self.dir.clone()))?;

        let mut files: Vec<LogFile> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let name = e.file_name();
                let date = date_from_file_name(name.to_str()?)?;
                Some(LogFile {
                    path: e.path(),
                    date,
                })
            })
            .collect();

        if files.is_empty() {
            return Err(QueryError::DirectoryUnavailable(self.dir.clone()));
        }
        files.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(files)
    }

    /// Exact path for one date's file. No existence check here; callers
    /// decide what absence means for them.
    pub fn file_for_date(&self, date: &str) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{date}{FILE_SUFFIX}"))
    }
}

/// Extract the calendar date from a log file name.
/// Returns None if the name doesn't match the expected pattern.
pub fn date_from_file_name(name: &str) -> Option<String> {
    let date = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    if date.is_empty() {
        return None;
    }
    Some(date.to_string())
}
