//! By-date retrieval: every valid entry in one calendar date's file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::catalog::FileCatalog;
use crate::error::QueryError;
use crate::parse::parse_line;
use crate::types::LogEntry;

#[derive(Debug, Clone, Serialize)]
pub struct DateQueryResult {
    pub entries: Vec<LogEntry>,
    pub total: usize,
}

/// Return every valid entry in the file for `date`, in on-disk order, plus
/// the count of valid entries.
///
/// The date is validated before any filesystem access: strict zero-padded
/// `YYYY-MM-DD` only. A missing file is `FileNotFound`; a file with zero
/// valid lines is a successful empty result.
pub fn query_by_date(catalog: &FileCatalog, date: &str) -> Result<DateQueryResult, QueryError> {
    validate_date(date)?;

    let path = catalog.file_for_date(date);
    let file = match File::open(&path) {
        Ok(f) => f,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(QueryError::FileNotFound(path));
        }
        Err(err) => return Err(err.into()),
    };

    let entries = collect_entries(file, &path)?;
    let total = entries.len();
    Ok(DateQueryResult { entries, total })
}

/// Fold a file's lines through the tolerant parser, keeping successes in
/// file order. Malformed lines are skipped, never surfaced.
pub(crate) fn collect_entries(file: File, path: &Path) -> Result<Vec<LogEntry>, QueryError> {
    let reader = BufReader::new(file);
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for line in reader.split(b'\n') {
        let line = line?;
        // Invalid UTF-8 is line corruption, not a read fault; skip it like
        // any other malformed line.
        match String::from_utf8(line).ok().as_deref().and_then(parse_line) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("skipped {} unparseable lines in {}", skipped, path.display());
    }
    Ok(entries)
}

fn validate_date(date: &str) -> Result<(), QueryError> {
    // chrono accepts "2024-1-5" for %Y-%m-%d; requiring round-trip equality
    // pins the format to zero-padded YYYY-MM-DD.
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| QueryError::InvalidDate(date.to_string()))?;
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(QueryError::InvalidDate(date.to_string()));
    }
    Ok(())
}
