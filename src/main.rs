//! CLI entry point for the self-similar mosaic generator

use clap::Parser;
use selfmosaic::io::cli::{Cli, MosaicRunner};
use selfmosaic::io::logging;

fn main() -> selfmosaic::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let runner = MosaicRunner::new(cli);
    runner.run()
}
