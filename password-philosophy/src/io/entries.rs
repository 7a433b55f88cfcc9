//! Reading the password database.

use std::path::Path;

use anyhow::Result;

use crate::core::entry::{Entry, parse_entry};

/// Read every entry of the database. The first malformed line aborts the read.
pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    puzzle::io::input::read_records(path, parse_entry)
}
