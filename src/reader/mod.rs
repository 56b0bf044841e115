//! Result-file reader
//!
//! Parses a recorded-latency result file into an ordered sequence of `f64`
//! samples, consulting the declared count in the header line. The first data
//! line carries the connection-establishment latency and is excluded from the
//! returned samples.

pub mod progress;

pub use progress::ProgressLine;

use crate::{
    error::{AppError, Result},
    models::ResultHeader,
};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Reader for latency result files
pub struct ResultReader {
    /// Emit a progress update every this many samples
    progress_interval: usize,
}

impl Default for ResultReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultReader {
    /// Create a reader with the default progress interval
    pub fn new() -> Self {
        Self {
            progress_interval: crate::defaults::PROGRESS_INTERVAL,
        }
    }

    /// Create a reader with a custom progress interval
    pub fn with_progress_interval(progress_interval: usize) -> Self {
        Self {
            progress_interval: progress_interval.max(1),
        }
    }

    /// Read a result file into its header and samples, in file order
    ///
    /// The file handle is scoped to this call and released on every exit
    /// path, including parse failures.
    pub fn read<W: Write>(
        &self,
        path: &Path,
        progress: &mut ProgressLine<W>,
    ) -> Result<(ResultHeader, Vec<f64>)> {
        let file = File::open(path)
            .map_err(|e| AppError::io(format!("Cannot open '{}': {}", path.display(), e)))?;
        let mut lines = BufReader::new(file).lines();

        let header_line = lines
            .next()
            .ok_or_else(|| AppError::unexpected_eof("Result file is empty"))??;
        let header: ResultHeader = header_line.parse()?;

        // Connection-establishment latency, excluded from the sample set
        lines
            .next()
            .ok_or_else(|| {
                AppError::unexpected_eof(
                    "Result file ends after the header; the connection-establishment line is missing",
                )
            })??;

        let expected = header.sample_count();
        let mut samples = Vec::with_capacity(expected);

        for i in 0..expected {
            let line = lines
                .next()
                .ok_or_else(|| {
                    AppError::unexpected_eof(format!(
                        "Expected {} samples but the file ends after {}",
                        expected, i
                    ))
                })?
                .map_err(|e| AppError::io(format!("Read failed at sample {}: {}", i + 1, e)))?;

            let value: f64 = line.trim().parse().map_err(|_| {
                AppError::parse(format!(
                    "Line {} ('{}') is not a floating-point number",
                    i + 3,
                    line.trim()
                ))
            })?;
            samples.push(value);

            if i % self.progress_interval == 0 {
                progress.report(i, expected)?;
            }
        }

        progress.report(expected, expected)?;
        progress.finish()?;

        Ok((header, samples))
    }
}
