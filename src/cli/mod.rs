//! Command-line interface for the latency result analyzer

use clap::Parser;
use std::path::PathBuf;

/// Latency Result Analyzer - computes summary statistics from a recorded result file
#[derive(Parser, Debug, Clone)]
#[command(name = "latency-result-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the result file to analyze
    ///
    /// Optional at the clap level so a missing argument produces the
    /// classic usage line instead of clap's error text.
    #[arg(value_name = "RESULT_FILE")]
    pub file: Option<PathBuf>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress the in-place read progress line
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }
        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }

    /// The usage line printed when the result file argument is missing
    pub fn usage_line(program: &str) -> String {
        format!("Usage:\n\t{} result.txt", program)
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
