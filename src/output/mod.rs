//! Output formatting and display system
//!
//! Provides the formatter trait, plain and colored implementations, and
//! the coordinator that assembles the final console text for a completed
//! measurement.

mod colored;
mod formatter;

pub use colored::{ColorScheme, ColoredFormatter};
pub use formatter::{format_mean, FormattingOptions, OutputFormatter, PlainFormatter};

use crate::{error::Result, models::MeasurementReport};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        if enable_color {
            Box::new(ColoredFormatter::new(FormattingOptions { enable_color }))
        } else {
            Box::new(PlainFormatter::new())
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn OutputFormatter> {
        Self::create_formatter(false)
    }
}

/// Main output coordinator that handles result display
pub struct OutputCoordinator {
    formatter: Box<dyn OutputFormatter>,
    verbose: bool,
}

impl OutputCoordinator {
    /// Create a new output coordinator with the specified formatter
    pub fn new(formatter: Box<dyn OutputFormatter>, verbose: bool) -> Self {
        Self { formatter, verbose }
    }

    /// Assemble the console output for a completed measurement.
    ///
    /// The canonical report line always comes first; verbose mode appends
    /// the measurement summary and the statistics block.
    pub fn display_report(&self, report: &MeasurementReport) -> Result<String> {
        let mut output = self.formatter.format_report_line(report)?;

        if self.verbose {
            output.push_str("\n\n");
            output.push_str(&self.formatter.format_summary(report)?);

            if let Some(ref stats) = report.statistics {
                output.push_str("\n\n");
                output.push_str(&self.formatter.format_statistics(stats)?);
            }
        }

        Ok(output)
    }

    /// Format a warning for display during configuration loading
    pub fn display_warning(&self, warning: &str) -> Result<String> {
        self.formatter.format_warning(warning)
    }
}
