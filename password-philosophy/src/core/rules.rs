//! The two password rules and counting valid entries.

use super::entry::Entry;
use crate::error::PolicyError;

/// Closed set of password rules an entry can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The sled rental shop's rule: the character occurs between
    /// `parameter1` and `parameter2` times, inclusive.
    CountWithinBounds,
    /// The toboggan shop's rule: exactly one of the 1-based positions
    /// `parameter1` and `parameter2` holds the character.
    ExactlyOnePosition,
}

impl Rule {
    pub const ALL: [Rule; 2] = [Rule::CountWithinBounds, Rule::ExactlyOnePosition];

    pub fn check(self, entry: &Entry) -> Result<bool, PolicyError> {
        match self {
            Rule::CountWithinBounds => Ok(validate_bounds(entry)),
            Rule::ExactlyOnePosition => validate_positions(entry),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rule::CountWithinBounds => "old policy (count within bounds)",
            Rule::ExactlyOnePosition => "new policy (exactly one position)",
        }
    }
}

/// True if the policy character occurs within `[parameter1, parameter2]`
/// times. An inverted range accepts nothing.
pub fn validate_bounds(entry: &Entry) -> bool {
    let policy = &entry.policy;
    let count = entry
        .password
        .chars()
        .filter(|&c| c == policy.character)
        .count();
    (policy.parameter1..=policy.parameter2).contains(&count)
}

/// True if exactly one of the two 1-based positions holds the policy
/// character.
///
/// Positions count characters, not bytes. A position of zero or past the end
/// of the password is an error rather than a non-match.
pub fn validate_positions(entry: &Entry) -> Result<bool, PolicyError> {
    let character = entry.policy.character;
    let first = char_at(&entry.password, entry.policy.parameter1)? == character;
    let second = char_at(&entry.password, entry.policy.parameter2)? == character;
    Ok(first != second)
}

fn char_at(password: &str, position: usize) -> Result<char, PolicyError> {
    position
        .checked_sub(1)
        .and_then(|index| password.chars().nth(index))
        .ok_or_else(|| PolicyError::PositionOutOfRange {
            position,
            password: password.to_string(),
            length: password.chars().count(),
        })
}

/// Count the entries that satisfy `rule`.
///
/// The first entry whose check fails with an error aborts the count.
pub fn count_valid(entries: &[Entry], rule: Rule) -> Result<usize, PolicyError> {
    let mut count = 0;
    for entry in entries {
        if rule.check(entry)? {
            count += 1;
        }
    }
    Ok(count)
}
