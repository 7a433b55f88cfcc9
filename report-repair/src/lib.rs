//! Advent of Code 2020, day 1: Report Repair.
//!
//! Finds two (then three) expense entries summing to a target and reports
//! their product.
//!
//! - **[`core`]**: Pure search logic over an in-memory expense list.
//! - **[`io`]**: Parsing expense lines read from disk.
//! - **[`report`]**: Human-readable rendering of a run.

pub mod core;
pub mod io;
pub mod report;

pub use crate::core::search::{find_pair, find_triple};
pub use crate::core::types::{Expense, ExpensePair, ExpenseTriple, TARGET_SUM};
pub use crate::io::expenses::{ParseError, parse_expense, read_expenses};
