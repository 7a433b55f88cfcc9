//! Side-effecting helpers shared by the puzzle binaries.

pub mod config;
pub mod input;
pub mod paths;
