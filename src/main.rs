//! Latency Result Analyzer - Main CLI Application
//!
//! Reads a recorded-latency result file, computes summary statistics and
//! tail percentiles, and prints them to standard output.

use clap::Parser;
use latency_result_analyzer::{
    cli::Cli,
    error::{AppError, Result},
    output::OutputFormatterFactory,
    reader::{ProgressLine, ResultReader},
    stats::StatisticsEngine,
};
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();
    let use_colors = cli.use_colors();

    if let Err(e) = run_application(cli) {
        eprintln!("{}", e.format_for_console(use_colors));
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    if let Err(msg) = cli.validate() {
        return Err(AppError::usage(msg));
    }

    let path: PathBuf = match cli.file {
        Some(ref path) => path.clone(),
        None => {
            // Kept in the original one-line form, but as an error exit
            println!("{}", Cli::usage_line(&program_name()));
            return Err(AppError::usage("Missing result file argument"));
        }
    };

    println!("read file...");
    let mut progress = ProgressLine::stdout(!cli.no_progress);
    let (header, samples) = ResultReader::new().read(&path, &mut progress)?;

    if cli.verbose {
        println!("label: {}", header.label);
        println!("samples: {}", samples.len());
    }

    println!("process...");
    let summary = StatisticsEngine::new().analyze(samples)?;

    let formatter = OutputFormatterFactory::create_formatter(cli.use_colors());
    println!("{}", formatter.format_summary(&summary));

    Ok(())
}

/// Name the process was invoked as, for the usage line
fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| latency_result_analyzer::PKG_NAME.to_string())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Io(_) => {
            eprintln!();
            eprintln!("File help:");
            eprintln!("  - Check that the result file path is correct");
            eprintln!("  - Check file permissions");
        }
        AppError::Parse(_) | AppError::UnexpectedEof(_) => {
            eprintln!();
            eprintln!("Input format help:");
            eprintln!("  - The first line must be 'label:count'");
            eprintln!("  - Every following line must hold one floating-point value");
            eprintln!("  - The file needs count data lines after the header");
        }
        AppError::Statistics(_) => {
            eprintln!();
            eprintln!("Analysis help:");
            eprintln!("  - Standard deviation needs at least 2 samples; check the declared count");
        }
        _ => {}
    }
}
