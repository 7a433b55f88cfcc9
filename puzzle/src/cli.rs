//! Input-source flags shared by every puzzle binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::io::config::{PuzzleConfig, load_config};
use crate::io::paths::PuzzlePaths;

/// Where a run reads its records from.
///
/// Precedence: `--input` > `--example` > the configured default input.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Read records from this file instead of the puzzle's default input.
    #[arg(long, value_name = "PATH", conflicts_with = "example")]
    pub input: Option<PathBuf>,

    /// Read the bundled example fixture instead of the real input.
    #[arg(long)]
    pub example: bool,
}

impl InputArgs {
    /// Resolve the input file for a puzzle rooted at `paths`.
    ///
    /// Loads `puzzle.toml` only when the configured names are needed.
    pub fn resolve(&self, paths: &PuzzlePaths) -> Result<PathBuf> {
        if let Some(input) = &self.input {
            debug!(path = %input.display(), "input overridden on command line");
            return Ok(input.clone());
        }
        let cfg = load_config(&paths.config_path).context("load puzzle config")?;
        Ok(self.configured_path(paths, &cfg))
    }

    fn configured_path(&self, paths: &PuzzlePaths, cfg: &PuzzleConfig) -> PathBuf {
        if self.example {
            paths.example_path(cfg)
        } else {
            paths.input_path(cfg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::Path;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        input: InputArgs,
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["puzzle"]);
        assert!(cli.input.input.is_none());
        assert!(!cli.input.example);
    }

    #[test]
    fn input_conflicts_with_example() {
        let result = Cli::try_parse_from(["puzzle", "--example", "--input", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn explicit_input_wins() {
        let paths = PuzzlePaths::new("/puzzles/day01");
        let args = InputArgs {
            input: Some(PathBuf::from("elsewhere.txt")),
            example: false,
        };
        assert_eq!(
            args.resolve(&paths).expect("resolve"),
            Path::new("elsewhere.txt")
        );
    }

    #[test]
    fn example_uses_configured_fixture() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = PuzzlePaths::new(temp.path());
        fs::write(&paths.config_path, "example_file = \"sample.txt\"\n").expect("write");

        let args = InputArgs {
            input: None,
            example: true,
        };
        assert_eq!(
            args.resolve(&paths).expect("resolve"),
            temp.path().join("sample.txt")
        );
    }

    #[test]
    fn default_run_uses_input_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = PuzzlePaths::new(temp.path());
        let resolved = InputArgs::default().resolve(&paths).expect("resolve");
        assert_eq!(resolved, temp.path().join("input.txt"));
    }
}
