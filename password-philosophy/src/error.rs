//! Errors raised while parsing or validating password entries.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Line does not have the `<n>-<m> <char>: <password>` shape.
    #[error("invalid entry: {line:?}")]
    Parse { line: String },

    /// A 1-based position rule points outside the password.
    #[error("position {position} is outside password {password:?} (length {length})")]
    PositionOutOfRange {
        position: usize,
        password: String,
        length: usize,
    },
}
