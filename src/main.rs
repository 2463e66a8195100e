use anyhow::Result;
use clap::Parser;

use apigen::{cli::{handle_command, Cli}, utils::init_logger};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Logs go to stderr, rendered output to stdout
    init_logger(cli.verbose);

    handle_command(&cli)
}
