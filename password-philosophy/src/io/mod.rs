//! Side-effecting operations: reading the password database.

pub mod entries;
