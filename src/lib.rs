//! Latency Result Analyzer
//!
//! A one-shot offline analysis tool that reads a recorded-latency result
//! file, computes descriptive statistics (median, mean, sample standard
//! deviation) and tail percentiles (99th, 99.9th, 99.99th), and prints them.

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod reader;
pub mod stats;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{LatencySummary, PercentileValue, ResultHeader};
pub use output::{ColoredFormatter, OutputFormatter, OutputFormatterFactory, PlainFormatter};
pub use reader::{ProgressLine, ResultReader};
pub use stats::StatisticsEngine;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    /// Emit a read-progress update once every this many samples
    pub const PROGRESS_INTERVAL: usize = 1000;

    /// Tail percentiles reported by the analyzer, as fractions
    pub const TAIL_PERCENTILES: &[f64] = &[0.99, 0.999, 0.9999];
}
