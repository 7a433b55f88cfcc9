//! Advent of Code 2020, day 2: Password Philosophy.
//!
//! Parses `<n>-<m> <char>: <password>` entries and counts how many satisfy
//! each of two password rules.
//!
//! - **[`core`]**: Entry model, parsing, and the two validation rules. No I/O.
//! - **[`io`]**: Reading entries from disk.
//! - **[`report`]**: Human-readable rendering of a run.

pub mod core;
pub mod error;
pub mod io;
pub mod report;

pub use crate::core::entry::{Entry, Policy, parse_entry};
pub use crate::core::rules::{Rule, count_valid, validate_bounds, validate_positions};
pub use crate::error::PolicyError;
pub use crate::io::entries::read_entries;
