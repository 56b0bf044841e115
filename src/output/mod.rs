//! Output formatting for computed statistics
//!
//! The report shape is fixed (`label:\tvalue` lines); formatters only decide
//! presentation. Colored output highlights the labels, plain output is meant
//! for scripts and logs.

use crate::models::{LatencySummary, PercentileValue};
use colored::Colorize;

/// Formatter for a computed latency summary
pub trait OutputFormatter {
    /// Render the full summary as the lines printed after processing
    fn format_summary(&self, summary: &LatencySummary) -> String;
}

/// Plain text formatter without any styling
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_summary(&self, summary: &LatencySummary) -> String {
        let mut lines = Vec::with_capacity(3 + summary.percentiles.len());
        lines.push(format!("median:\t{}", summary.median));
        lines.push(format!("avg:\t{}", summary.mean));
        lines.push(format!("stdev:\t{}", summary.std_dev));
        for pv in &summary.percentiles {
            lines.push(format!("{}:\t{}", percentile_label(pv), pv.value));
        }
        lines.join("\n")
    }
}

/// Formatter that colors the statistic labels
pub struct ColoredFormatter;

impl OutputFormatter for ColoredFormatter {
    fn format_summary(&self, summary: &LatencySummary) -> String {
        let mut lines = Vec::with_capacity(3 + summary.percentiles.len());
        lines.push(format!("{}\t{}", "median:".green().bold(), summary.median));
        lines.push(format!("{}\t{}", "avg:".green().bold(), summary.mean));
        lines.push(format!("{}\t{}", "stdev:".green().bold(), summary.std_dev));
        for pv in &summary.percentiles {
            lines.push(format!(
                "{}\t{}",
                format!("{}:", percentile_label(pv)).yellow().bold(),
                pv.value
            ));
        }
        lines.join("\n")
    }
}

/// Label for a percentile line, e.g. `99.9%(990)`
///
/// The percent is printed with as few digits as the fraction needs, so 0.99
/// renders as `99%` and 0.9999 as `99.99%`.
fn percentile_label(pv: &PercentileValue) -> String {
    // Fixed precision first, then trim, so 0.9999 * 100 never leaks float noise
    let mut percent = format!("{:.4}", pv.percent * 100.0);
    while percent.ends_with('0') {
        percent.pop();
    }
    if percent.ends_with('.') {
        percent.pop();
    }
    format!("{}%({})", percent, pv.index)
}

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color preference
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        if enable_color {
            Box::new(ColoredFormatter)
        } else {
            Box::new(PlainFormatter)
        }
    }
}
