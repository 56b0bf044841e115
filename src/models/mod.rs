//! Data models for result files and computed statistics

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Header of a latency result file
///
/// The first line of a result file has the form `label:count`, where `count`
/// is the declared number of data lines that follow. The first data line is
/// the connection-establishment latency and is excluded from analysis, so a
/// valid file yields `count - 1` samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultHeader {
    /// Label from the header line (e.g. "latency")
    pub label: String,

    /// Declared number of data lines, including the discarded first sample
    pub declared_count: usize,
}

impl ResultHeader {
    /// Number of samples that enter the analysis
    pub fn sample_count(&self) -> usize {
        self.declared_count - 1
    }
}

impl FromStr for ResultHeader {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end();
        let (label, count) = line.split_once(':').ok_or_else(|| {
            AppError::parse(format!(
                "Header line '{}' is not in 'label:count' form",
                line
            ))
        })?;

        let declared_count: usize = count.trim().parse().map_err(|_| {
            AppError::parse(format!("Header count '{}' is not an integer", count.trim()))
        })?;

        if declared_count == 0 {
            return Err(AppError::parse(
                "Header declares a count of 0; a result file holds at least the connection-establishment sample",
            ));
        }

        Ok(Self {
            label: label.to_string(),
            declared_count,
        })
    }
}

/// Value of a single tail percentile in the sorted sample sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileValue {
    /// Percentile as a fraction (e.g. 0.99 for the 99th percentile)
    pub percent: f64,

    /// Index into the sorted sequence where the value was taken
    pub index: usize,

    /// Sample value at that index
    pub value: f64,
}

/// Computed statistics for one result file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencySummary {
    /// Number of samples that entered the analysis
    pub samples: usize,

    /// Middle value (average of the two middle values for even-length input)
    pub median: f64,

    /// Arithmetic mean
    pub mean: f64,

    /// Sample standard deviation (Bessel-corrected, n - 1 divisor)
    pub std_dev: f64,

    /// Tail percentile values, in ascending percentile order
    pub percentiles: Vec<PercentileValue>,
}
