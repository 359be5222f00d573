//! CLI entry point for the four-sides world generator

use clap::Parser;
use foursides::io::cli::{Cli, WorldRunner};
use foursides::io::logging::init_logging;

fn main() -> foursides::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet)?;
    WorldRunner::new(cli).run()
}
