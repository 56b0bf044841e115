//! Statistical analysis of recorded latency samples
//!
//! Sorts the sample sequence and computes median, mean, sample standard
//! deviation and tail percentile values. Sorting dominates the cost at
//! O(n log n); every statistic afterwards is a linear pass or an index
//! lookup.

use crate::{
    error::{AppError, Result},
    models::{LatencySummary, PercentileValue},
};

/// Statistics engine for latency sample sequences
pub struct StatisticsEngine {
    /// Percentiles to report, as fractions in (0, 1)
    percentiles: Vec<f64>,
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatisticsEngine {
    /// Create an engine reporting the default tail percentiles
    pub fn new() -> Self {
        Self {
            percentiles: crate::defaults::TAIL_PERCENTILES.to_vec(),
        }
    }

    /// Create an engine reporting custom percentiles
    pub fn with_percentiles(percentiles: Vec<f64>) -> Self {
        Self { percentiles }
    }

    /// Sort the samples and compute the full summary
    ///
    /// Consumes the sample sequence; order of the input is irrelevant, only
    /// the multiset of values matters. Requires at least 2 samples for the
    /// standard deviation.
    pub fn analyze(&self, mut samples: Vec<f64>) -> Result<LatencySummary> {
        samples.sort_by(f64::total_cmp);
        self.analyze_sorted(&samples)
    }

    /// Compute the summary for an already-sorted sequence
    ///
    /// Idempotent: re-running on the same sorted sequence yields the same
    /// summary.
    pub fn analyze_sorted(&self, sorted: &[f64]) -> Result<LatencySummary> {
        let median = median(sorted)?;
        let mean = mean(sorted)?;
        let std_dev = sample_std_dev(sorted)?;

        let percentiles = self
            .percentiles
            .iter()
            .map(|&p| {
                let index = percentile_index(sorted.len(), p);
                PercentileValue {
                    percent: p,
                    index,
                    value: sorted[index],
                }
            })
            .collect();

        Ok(LatencySummary {
            samples: sorted.len(),
            median,
            mean,
            std_dev,
            percentiles,
        })
    }
}

/// Index of the p-th percentile in a sorted sequence of length `n`
///
/// `min(ceil(n * p), n - 1)`; the clamp keeps p = 1.0 (and rounding at the
/// top end) inside the sequence.
pub fn percentile_index(n: usize, p: f64) -> usize {
    debug_assert!(n > 0);
    let index = (n as f64 * p).ceil() as usize;
    index.min(n - 1)
}

/// Middle value of a sorted sequence
///
/// For even-length input, the average of the two middle values.
pub fn median(sorted: &[f64]) -> Result<f64> {
    if sorted.is_empty() {
        return Err(AppError::statistics(
            "Median requires at least one sample",
        ));
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Arithmetic mean
pub fn mean(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(AppError::statistics("Mean requires at least one sample"));
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Sample standard deviation with Bessel's correction (n - 1 divisor)
pub fn sample_std_dev(samples: &[f64]) -> Result<f64> {
    if samples.len() < 2 {
        return Err(AppError::statistics(format!(
            "Standard deviation requires at least 2 samples, got {}",
            samples.len()
        )));
    }
    let avg = mean(samples)?;
    let variance = samples
        .iter()
        .map(|v| {
            let diff = v - avg;
            diff * diff
        })
        .sum::<f64>()
        / (samples.len() - 1) as f64;
    Ok(variance.sqrt())
}
