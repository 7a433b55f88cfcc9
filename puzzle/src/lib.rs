//! Shared plumbing for the puzzle binaries.
//!
//! Every puzzle follows the same shape: resolve an input file next to the
//! puzzle crate, read it once, parse each line into a record, then hand the
//! records to pure solving logic. This crate owns the first half of that
//! shape so the puzzle crates only contain parsing and solving.
//!
//! - **[`io`]**: Side-effecting operations (config, path resolution, reading
//!   records from disk).
//! - **[`cli`]**: Input-source flags shared by all puzzle binaries.
//! - **[`logging`]**: Development tracing on stderr.

pub mod cli;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
