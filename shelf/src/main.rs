use anyhow::Result;
use clap::Parser as ClapParser;
use shelf::io;
use shelf::io::cli::{Cli, run_cli};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;
    run_cli(&args)
}
