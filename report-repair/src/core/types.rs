//! Expense report values and search results.

use std::fmt;

/// One line of the expense report.
pub type Expense = i32;

/// Sum the Elves' accounting expects.
pub const TARGET_SUM: i64 = 2020;

/// Two entries from distinct positions of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpensePair(pub Expense, pub Expense);

/// Three entries from distinct positions of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseTriple(pub Expense, pub Expense, pub Expense);

impl ExpensePair {
    pub fn sum(&self) -> i64 {
        i64::from(self.0) + i64::from(self.1)
    }

    pub fn product(&self) -> i128 {
        i128::from(self.0) * i128::from(self.1)
    }
}

impl ExpenseTriple {
    pub fn sum(&self) -> i64 {
        i64::from(self.0) + i64::from(self.1) + i64::from(self.2)
    }

    pub fn product(&self) -> i128 {
        i128::from(self.0) * i128::from(self.1) * i128::from(self.2)
    }
}

impl fmt::Display for ExpensePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.0, self.1)
    }
}

impl fmt::Display for ExpenseTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}
