//! Canonical paths inside a puzzle directory.

use std::path::PathBuf;

use super::config::{CONFIG_FILE, PuzzleConfig};

/// Paths for a puzzle crate directory.
///
/// Binaries build this from `env!("CARGO_MANIFEST_DIR")` so inputs are found
/// next to the puzzle's own sources regardless of the working directory.
#[derive(Debug, Clone)]
pub struct PuzzlePaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
}

impl PuzzlePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: root.join(CONFIG_FILE),
            root,
        }
    }

    pub fn input_path(&self, cfg: &PuzzleConfig) -> PathBuf {
        self.root.join(&cfg.input_file)
    }

    pub fn example_path(&self, cfg: &PuzzleConfig) -> PathBuf {
        self.root.join(&cfg.example_file)
    }
}
