//! Password Philosophy: count passwords that satisfy their policies.
//!
//! Reads `input.txt` beside this crate (or `--example` / `--input <PATH>`)
//! and prints how many entries are valid under each password rule.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use password_philosophy::{read_entries, report};
use puzzle::cli::InputArgs;
use puzzle::exit_codes;
use puzzle::io::paths::PuzzlePaths;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "password-philosophy",
    version,
    about = "Count passwords that satisfy their corporate policies"
)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,
}

fn main() {
    puzzle::logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = PuzzlePaths::new(Path::new(env!("CARGO_MANIFEST_DIR")));
    let input_path = cli.input.resolve(&paths)?;
    info!(path = %input_path.display(), "reading password database");

    let entries = read_entries(&input_path).context("read password database")?;
    let rendered = report::render(&entries).context("validate entries")?;
    print!("{rendered}");
    Ok(())
}
