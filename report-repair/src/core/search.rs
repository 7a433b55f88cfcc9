//! Target-sum search over the expense report.
//!
//! "First found" is defined by input order: outer scans walk positions in
//! ascending order, and a pair is reported as soon as the entry at the current
//! position has a complement at some *other* position.

use std::collections::HashMap;

use tracing::debug;

use super::types::{Expense, ExpensePair, ExpenseTriple};

/// Find two entries at distinct positions summing to `target`.
///
/// Returns `(a, b)` where `a` is the earliest entry that has a complement
/// elsewhere in the report and `b` is that complement. Duplicate values at
/// different positions may pair with each other; a single position never
/// pairs with itself.
pub fn find_pair(expenses: &[Expense], target: i64) -> Option<ExpensePair> {
    let positions = positions_by_value(expenses);

    expenses.iter().enumerate().find_map(|(index, &expense)| {
        let complement = complement_of(expense, target)?;
        positions
            .get(&complement)?
            .iter()
            .any(|&other| other != index)
            .then_some(ExpensePair(expense, complement))
    })
}

/// Find three entries at distinct positions summing to `target`.
///
/// Fixes each position in turn, removes it from the report (duplicates of
/// its value at other positions stay), and searches the remainder for a pair
/// summing to what is left of the target.
pub fn find_triple(expenses: &[Expense], target: i64) -> Option<ExpenseTriple> {
    for (index, &first) in expenses.iter().enumerate() {
        let Some(remaining_target) = target.checked_sub(i64::from(first)) else {
            continue;
        };
        let remaining = [&expenses[..index], &expenses[index + 1..]].concat();

        if let Some(ExpensePair(second, third)) = find_pair(&remaining, remaining_target) {
            debug!(index, first, second, third, "triple found");
            return Some(ExpenseTriple(first, second, third));
        }
    }
    None
}

/// Every position at which each value occurs, in ascending order.
fn positions_by_value(expenses: &[Expense]) -> HashMap<Expense, Vec<usize>> {
    let mut positions: HashMap<Expense, Vec<usize>> = HashMap::new();
    for (index, &expense) in expenses.iter().enumerate() {
        positions.entry(expense).or_default().push(index);
    }
    positions
}

/// `target - expense`, if it is representable as an expense.
fn complement_of(expense: Expense, target: i64) -> Option<Expense> {
    let complement = target.checked_sub(i64::from(expense))?;
    Expense::try_from(complement).ok()
}
