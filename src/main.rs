// tabulog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Opening the input/output files and running the transform pass

use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use tabulog::core::transform;
use tabulog::util;
use tabulog::util::error::TabulogError;

/// tabulog - Convert mixed-timestamp log files into spreadsheet-ready CSV.
///
/// Timestamped lines become data rows with a seconds-within-the-hour value
/// and a relative-reference formula; lines without a recognisable timestamp
/// are relocated to the end of the output as numbered footnotes.
#[derive(Parser, Debug)]
#[command(name = "tabulog", version, about)]
struct Cli {
    /// Log file to read.
    input: PathBuf,

    /// CSV file to write (overwritten if it exists).
    output: PathBuf,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        input = %cli.input.display(),
        output = %cli.output.display(),
        "tabulog starting"
    );

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Transform failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> util::error::Result<()> {
    let input = File::open(&cli.input).map_err(|e| TabulogError::io(&cli.input, "open", e))?;
    let output =
        File::create(&cli.output).map_err(|e| TabulogError::io(&cli.output, "create", e))?;

    // Reads can fail mid-pass too; attribute those to the input path. Write
    // and flush failures surface through the same transform call, so a
    // mid-pass output error carries the input path in its context — the
    // underlying io::Error still names the real cause.
    let summary = transform::transform(BufReader::new(input), BufWriter::new(output))
        .map_err(|e| TabulogError::io(&cli.input, "transform", e))?;

    tracing::info!(
        lines = summary.lines_read,
        records = summary.records,
        footnotes = summary.footnote_blocks,
        rows = summary.rows_written,
        "Transform complete"
    );

    Ok(())
}
