//! Deterministic, pure logic for password entries.
//!
//! Core modules must be free of I/O side effects.

pub mod entry;
pub mod rules;
