//! Stable exit codes for puzzle binaries.

/// Run completed, whether or not a solution was found.
pub const OK: i32 = 0;
/// Run aborted: unreadable input, malformed record, bad config, or a fatal
/// validation error.
pub const INVALID: i32 = 1;
