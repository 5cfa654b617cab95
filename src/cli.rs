// src/cli.rs
use std::{env, io::{self, Write}};

use tracing::warn;

use crate::config::ScrapeOptions;
use crate::error::Result;
use crate::record::OutputRecord;

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Scrape,
    Help,
}

pub fn run() -> Result<()> {
    if parse_cli(env::args().skip(1)) == Mode::Help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    let record = crate::scrape::collect(&ScrapeOptions::default())?;
    write_record(&mut io::stdout().lock(), &record)
}

/// The modem address and pages are fixed; only help is recognized.
/// Anything else is logged and ignored.
pub fn parse_cli<I: IntoIterator<Item = String>>(args: I) -> Mode {
    let mut mode = Mode::Scrape;
    for a in args {
        match a.as_str() {
            "-h" | "--help" => mode = Mode::Help,
            _ => warn!("Ignoring unknown arg: {a}"),
        }
    }
    mode
}

/// Serialize first so a failure never leaves half a document on stdout.
pub fn write_record<W: Write>(out: &mut W, record: &OutputRecord) -> Result<()> {
    let json = record.to_json()?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}
