// src/bin/cli.rs
use cm_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run()?;
    Ok(())
}
