//! Test-only helpers for building puzzle directories on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::paths::PuzzlePaths;

/// Write `lines` (newline-terminated) to `dir/name` and return the path.
pub fn write_input(dir: &Path, name: &str, lines: &[&str]) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut buf = lines.join("\n");
    buf.push('\n');
    fs::write(&path, buf).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Scratch puzzle directory backed by a temp dir.
pub struct TestPuzzle {
    dir: TempDir,
}

impl TestPuzzle {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp puzzle dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> PuzzlePaths {
        PuzzlePaths::new(self.dir.path())
    }

    /// Write a record file into the puzzle directory.
    pub fn write_input(&self, name: &str, lines: &[&str]) -> Result<PathBuf> {
        write_input(self.dir.path(), name, lines)
    }

    pub fn write_config(&self, contents: &str) -> Result<()> {
        let path = self.paths().config_path;
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }
}
