//! Side-effecting operations: reading the expense report.

pub mod expenses;
