//! Reading line-oriented puzzle input.

use std::error::Error as StdError;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read `path` once and parse every line into a record.
///
/// Each line is handed to `parse` without its line terminator. The first line
/// that fails to parse aborts the read; the error names the file and the
/// 1-based line number and keeps the parser's error as its source. Nothing is
/// skipped, so a blank line in the middle of the file is a parse failure too.
pub fn read_records<T, E, F>(path: &Path, mut parse: F) -> Result<Vec<T>>
where
    F: FnMut(&str) -> std::result::Result<T, E>,
    E: StdError + Send + Sync + 'static,
{
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let records = contents
        .lines()
        .enumerate()
        .map(|(index, line)| {
            parse(line).with_context(|| format!("{}:{}", path.display(), index + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(path = %path.display(), records = records.len(), "input read");
    Ok(records)
}
