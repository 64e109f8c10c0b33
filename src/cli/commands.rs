use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use crate::grouping::group_by_book;
use crate::parsers::parse_clippings_file;
use crate::render::{render_json, render_markdown};
use crate::utils::resolve_input_path;

#[derive(Parser)]
#[command(name = "kindle-clippings")]
#[command(version = "0.1.0")]
#[command(about = "Convert a Kindle My Clippings.txt export into grouped markdown")]
pub struct Cli {
    /// Path to the My Clippings.txt file
    #[arg(default_value = "input/My Clippings.txt")]
    pub input_file: PathBuf,

    /// Output file name
    #[arg(short, long, default_value = "clippings.md")]
    pub output: PathBuf,

    /// Also write a JSON dump next to the markdown output
    #[arg(short, long)]
    pub json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    convert(&cli)
}

/// Run the full pipeline: read, parse, group, render, write.
///
/// Input I/O failures abort before any output is written. An otherwise
/// readable file that yields zero clippings ends the run without writing
/// anything rather than emitting an empty markdown shell.
pub fn convert(cli: &Cli) -> Result<()> {
    let input_path = resolve_input_path(&cli.input_file);

    info!("Parsing input file: {}", input_path.display());
    let clippings = parse_clippings_file(&input_path)?;

    if clippings.is_empty() {
        warn!("No clippings found in the file");
        return Ok(());
    }
    info!("Parsed {} clippings", clippings.len());

    let library = group_by_book(clippings);

    info!("Generating markdown output to: {}", cli.output.display());
    fs::write(&cli.output, render_markdown(&library))
        .with_context(|| format!("Failed to write markdown output: {}", cli.output.display()))?;

    if cli.json {
        let json_path = cli.output.with_extension("json");
        info!("Generating JSON output to: {}", json_path.display());
        fs::write(&json_path, render_json(&library)?)
            .with_context(|| format!("Failed to write JSON output: {}", json_path.display()))?;
    }

    info!("Processing completed successfully");
    Ok(())
}
