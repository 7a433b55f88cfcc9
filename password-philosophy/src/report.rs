//! Human-readable output for a password-philosophy run.

use crate::core::entry::Entry;
use crate::core::rules::{Rule, count_valid};
use crate::error::PolicyError;

/// Count valid entries under every rule and render the answer text.
///
/// Counting happens before anything is rendered, so a fatal validation error
/// produces no partial report.
pub fn render(entries: &[Entry]) -> Result<String, PolicyError> {
    let mut counts = Vec::with_capacity(Rule::ALL.len());
    for rule in Rule::ALL {
        counts.push((rule, count_valid(entries, rule)?));
    }

    let mut buf = String::new();
    buf.push_str(&format!("entries: {}\n", entries.len()));
    for entry in entries {
        buf.push_str(&format!("- {entry}\n"));
    }
    for (rule, count) in counts {
        buf.push_str(&format!("valid entries, {}: {}\n", rule.label(), count));
    }
    Ok(buf)
}
