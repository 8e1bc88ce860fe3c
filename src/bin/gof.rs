use anyhow::Result;
use clap::Parser;
use gof_patterns::cli::{self, Cli};

fn main() -> Result<()> {
    cli::execute(Cli::parse())
}
