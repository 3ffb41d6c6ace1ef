//! Packpick - Deterministic Package Selection
//!
//! Main entry point for the CLI application.

use clap::Parser;
use packpick::{select, PackError};

/// Packpick - Deterministic Package Selection
#[derive(Parser, Debug)]
#[command(name = "packpick")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed string for catalog derivation (e.g. an email address)
    input: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let input = args.input.ok_or(PackError::MissingInput)?;
    let selection = select(&input)?;

    println!("{}", selection);
    Ok(())
}
