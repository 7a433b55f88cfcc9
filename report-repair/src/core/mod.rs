//! Deterministic, pure logic for the expense search.
//!
//! Core modules must be free of I/O side effects.

pub mod search;
pub mod types;
