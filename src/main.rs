//! CLI entry point for the backtracking tile solver

use clap::Parser;
use collapsetile::io::cli::{Cli, RunDriver};

fn main() -> collapsetile::Result<()> {
    let cli = Cli::parse();
    collapsetile::io::logging::init_logger(cli.verbose);
    let driver = RunDriver::new(cli);
    driver.process()
}
