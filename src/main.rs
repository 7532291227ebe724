//! wordcounter - A word frequency counter for text files
//!
//! wordcounter provides:
//! - Byte-level word scanning (ASCII letters only, lower-cased, truncated at 20 letters)
//! - A first-letter grouped index kept in first-seen order
//! - Text, JSON and Markdown reports

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
