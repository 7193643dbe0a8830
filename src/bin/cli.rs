// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use ranking_compare::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = log::init();

    let params = cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))?;
    if params.help {
        eprintln!("{}", cli::HELP);
        return Ok(());
    }
    cli::run(&params).map_err(|e| eyre!("{e}"))
}
