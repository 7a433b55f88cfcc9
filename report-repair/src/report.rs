//! Human-readable output for a report-repair run.

use crate::core::search::{find_pair, find_triple};
use crate::core::types::Expense;

/// Solve both parts and render the answer text.
///
/// The triple is only searched for once a pair has been found; a missing pair
/// ends the report with a not-found line.
pub fn render(expenses: &[Expense], target: i64) -> String {
    let mut buf = String::new();
    buf.push_str(&format!("expenses: {expenses:?}\n"));

    let Some(pair) = find_pair(expenses, target) else {
        buf.push_str(&format!("no two expenses sum to {target}\n"));
        return buf;
    };
    buf.push_str(&format!("pair: {pair}\n"));
    buf.push_str(&format!("pair product: {}\n", pair.product()));

    let Some(triple) = find_triple(expenses, target) else {
        buf.push_str(&format!("no three expenses sum to {target}\n"));
        return buf;
    };
    buf.push_str(&format!("triple: {triple}\n"));
    buf.push_str(&format!("triple product: {}\n", triple.product()));
    buf
}
