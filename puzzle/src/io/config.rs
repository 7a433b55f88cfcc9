//! Puzzle configuration stored beside each puzzle crate as `puzzle.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// File name of the optional per-puzzle config.
pub const CONFIG_FILE: &str = "puzzle.toml";

/// Puzzle configuration (TOML).
///
/// The file is optional. Missing fields default to the conventional
/// Advent of Code layout (`input.txt` plus a `test.txt` example).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Input file read on a default run, relative to the puzzle directory.
    pub input_file: String,

    /// Example fixture read with `--example`, relative to the puzzle directory.
    pub example_file: String,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            input_file: "input.txt".to_string(),
            example_file: "test.txt".to_string(),
        }
    }
}

impl PuzzleConfig {
    pub fn validate(&self) -> Result<()> {
        validate_file_name("input_file", &self.input_file)?;
        validate_file_name("example_file", &self.example_file)?;
        Ok(())
    }
}

fn validate_file_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(anyhow!("{field} must be non-empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(anyhow!(
            "{field} must be a plain file name inside the puzzle directory (got '{name}')"
        ));
    }
    Ok(())
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PuzzleConfig::default()`.
pub fn load_config(path: &Path) -> Result<PuzzleConfig> {
    if !path.exists() {
        let cfg = PuzzleConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PuzzleConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
