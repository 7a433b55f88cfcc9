//! Report Repair: find the expense entries that sum to 2020.
//!
//! Reads `input.txt` beside this crate (or `--example` / `--input <PATH>`),
//! prints the pair and triple that sum to the target, and their products.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use puzzle::cli::InputArgs;
use puzzle::exit_codes;
use puzzle::io::paths::PuzzlePaths;
use report_repair::{TARGET_SUM, read_expenses, report};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "report-repair",
    version,
    about = "Find expense report entries that sum to a target"
)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    /// Sum the entries must add up to.
    #[arg(long, default_value_t = TARGET_SUM, allow_negative_numbers = true)]
    target: i64,
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
    info!(path = %input_path.display(), target = cli.target, "reading expense report");

    let expenses = read_expenses(&input_path).context("read expense report")?;
    print!("{}", report::render(&expenses, cli.target));
    Ok(())
}
