//! minicel CLI - evaluate a spreadsheet and print the result

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use minicel::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "minicel")]
#[command(
    author,
    version,
    about = "Evaluate the formulas of a pipe-delimited spreadsheet"
)]
struct Cli {
    /// Input spreadsheet file
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field delimiter for both input and output
    #[arg(short, long, default_value = "|")]
    delimiter: char,

    /// Digits after the decimal point for numbers
    #[arg(long, default_value = "6")]
    precision: usize,

    /// Print every formula's expression tree to stderr before evaluating
    #[arg(long)]
    dump_exprs: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.delimiter.is_ascii() {
        bail!("Delimiter must be an ASCII character, got '{}'", cli.delimiter);
    }
    let delimiter = cli.delimiter as u8;

    let read_options = CsvReadOptions {
        delimiter,
        ..Default::default()
    };
    let write_options = CsvWriteOptions {
        delimiter,
        precision: cli.precision,
    };

    let mut sheet = Spreadsheet::open_with_options(&cli.input, &read_options)
        .with_context(|| format!("Failed to load '{}'", cli.input.display()))?;

    if cli.dump_exprs {
        sheet
            .dump_expressions(io::stderr().lock())
            .context("Failed to write expression dump")?;
    }

    let stats = sheet.calculate().context("Failed to evaluate formulas")?;
    tracing::info!(
        formulas = stats.formula_count,
        calculated = stats.cells_calculated,
        "evaluated spreadsheet"
    );

    write_output(&sheet, cli.output.as_deref(), &write_options)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_output(sheet: &Spreadsheet, output: Option<&Path>, options: &CsvWriteOptions) -> Result<()> {
    if let Some(output_path) = output {
        let file = File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        sheet
            .write(BufWriter::new(file), options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} rows to '{}'",
            sheet.table().rows(),
            output_path.display()
        );
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        sheet
            .write(&mut handle, options)
            .context("Failed to write to stdout")?;
        handle.flush().context("Failed to write to stdout")?;
    }

    Ok(())
}
