//! Password database entries and line parsing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::PolicyError;

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-([0-9]+) (\w): (\w+)$").unwrap());

/// Corporate policy attached to a password.
///
/// The meaning of the two parameters depends on the rule applied: inclusive
/// occurrence bounds for [`Rule::CountWithinBounds`], 1-based positions for
/// [`Rule::ExactlyOnePosition`].
///
/// [`Rule::CountWithinBounds`]: crate::Rule::CountWithinBounds
/// [`Rule::ExactlyOnePosition`]: crate::Rule::ExactlyOnePosition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub character: char,
    pub parameter1: usize,
    pub parameter2: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub password: String,
    pub policy: Policy,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {}: {}",
            self.policy.parameter1, self.policy.parameter2, self.policy.character, self.password
        )
    }
}

/// Parse one `<n>-<m> <char>: <password>` line.
///
/// Surrounding whitespace is ignored; anything else that deviates from the
/// shape (including numbers too large for `usize`) is a parse error carrying
/// the line as read.
pub fn parse_entry(line: &str) -> Result<Entry, PolicyError> {
    let invalid = || PolicyError::Parse {
        line: line.to_string(),
    };

    let caps = ENTRY_RE.captures(line.trim()).ok_or_else(invalid)?;
    let parameter1 = caps[1].parse().map_err(|_| invalid())?;
    let parameter2 = caps[2].parse().map_err(|_| invalid())?;
    let character = caps[3].chars().next().ok_or_else(invalid)?;

    Ok(Entry {
        password: caps[4].to_string(),
        policy: Policy {
            character,
            parameter1,
            parameter2,
        },
    })
}
