// Runs every behavioral example in catalogue order.

use anyhow::Result;
use gof_patterns::{cli, Category};

fn main() -> Result<()> {
    cli::run_category(Category::Behavioral)
}
