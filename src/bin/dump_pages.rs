//! Prints the raw layout text of a roster PDF, page by page.
//!
//! Useful when the published layout changes and records stop matching.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use bnetza_rufzeichen::extract::extract_pages;
use bnetza_rufzeichen::reassemble::is_record_start;
use bnetza_rufzeichen::{Config, logging};
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "dump-pages")]
#[command(about = "Dump the extracted text of every page of a PDF", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Mark lines that start a record with '*'
    #[arg(short, long)]
    mark: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::default().with_verbosity(cli.verbose);
    logging::init(&config).context("failed to install logger")?;

    let bytes = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let pages = extract_pages(&bytes)?;

    for (page_idx, text) in pages.iter().enumerate() {
        println!("=== PAGE {} ===", page_idx + 1);
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let marker = if cli.mark && is_record_start(line) { "*" } else { " " };
            println!("{marker}{}: {:?}", i, line);
        }
    }

    Ok(())
}
