//! CLI entry point for the merge puzzle

use clap::Parser;
use merge_grid::io::cli::{Cli, SessionRunner};

fn main() -> merge_grid::Result<()> {
    let cli = Cli::parse();
    let runner = SessionRunner::new(cli);
    runner.run()
}
