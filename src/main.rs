use anyhow::Result;
use clap::Parser;

mod cli_bin;

use cli_bin::{args::Cli, commands};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    commands::run(cli)
}
