//! Parsing the expense report.

use std::path::Path;

use anyhow::Result;
use thiserror::Error;

use crate::core::types::Expense;

/// A report line that is not a single base-10 integer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid expense: {line:?}")]
pub struct ParseError {
    /// The offending line, as read.
    pub line: String,
}

/// Parse one report line: an optionally signed base-10 integer, surrounding
/// whitespace ignored.
pub fn parse_expense(line: &str) -> Result<Expense, ParseError> {
    line.trim().parse().map_err(|_| ParseError {
        line: line.to_string(),
    })
}

/// Read the whole report. The first malformed line aborts the read.
pub fn read_expenses(path: &Path) -> Result<Vec<Expense>> {
    puzzle::io::input::read_records(path, parse_expense)
}
