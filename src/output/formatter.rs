//! Core formatting traits and implementations
//!
//! This module defines the output formatting interface and provides the
//! plain text implementation. The canonical report line is produced here
//! and is identical for every formatter.

use crate::{
    error::{AppError, Result},
    models::MeasurementReport,
    stats::DistanceStatistics,
};
use std::fmt::Write as _;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> Result<String>;

    /// Format the canonical report line for a completed measurement
    fn format_report_line(&self, report: &MeasurementReport) -> Result<String>;

    /// Format the verbose statistics block
    fn format_statistics(&self, stats: &DistanceStatistics) -> Result<String>;

    /// Format the measurement summary (command, run count, wall time)
    fn format_summary(&self, report: &MeasurementReport) -> Result<String>;

    /// Format error messages
    fn format_error(&self, error: &str) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;

    /// Format success messages
    fn format_success(&self, message: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self { enable_color: true }
    }
}

/// Render a mean distance for the report line.
///
/// An integral mean keeps one decimal place (`10.0`); a fractional mean
/// uses the shortest round-trip rendering (`15.37`).
pub fn format_mean(mean: f64) -> String {
    if mean.fract() == 0.0 && mean.is_finite() {
        format!("{:.1}", mean)
    } else {
        format!("{}", mean)
    }
}

/// Plain text formatter implementation
///
/// Carries no state; its output is the same regardless of formatting
/// options, which only matter to the colored formatter.
#[derive(Debug, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    /// Create a new plain formatter
    pub fn new() -> Self {
        Self
    }

    /// Format duration in human-readable format
    fn format_duration(&self, duration_ms: f64) -> String {
        if duration_ms < 1.0 {
            format!("{:.2}μs", duration_ms * 1000.0)
        } else if duration_ms < 1000.0 {
            format!("{:.1}ms", duration_ms)
        } else if duration_ms < 60000.0 {
            format!("{:.2}s", duration_ms / 1000.0)
        } else {
            let minutes = (duration_ms / 60000.0) as u32;
            let seconds = (duration_ms % 60000.0) / 1000.0;
            format!("{}m{:.1}s", minutes, seconds)
        }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "=".repeat(title.len() + 4);

        writeln!(output, "{}", border)
            .map_err(|e| AppError::io(format!("Failed to format header: {}", e)))?;
        writeln!(output, "  {}  ", title)
            .map_err(|e| AppError::io(format!("Failed to format header: {}", e)))?;
        write!(output, "{}", border)
            .map_err(|e| AppError::io(format!("Failed to format header: {}", e)))?;

        Ok(output)
    }

    fn format_report_line(&self, report: &MeasurementReport) -> Result<String> {
        // The canonical line; never decorated, colored, or reworded.
        Ok(format!(
            "average distance on {} runs is: {}km",
            report.runs,
            format_mean(report.mean)
        ))
    }

    fn format_statistics(&self, stats: &DistanceStatistics) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Distance Statistics:")
            .map_err(|e| AppError::io(format!("Failed to format statistics: {}", e)))?;
        writeln!(output, "--------------------")
            .map_err(|e| AppError::io(format!("Failed to format statistics: {}", e)))?;
        writeln!(output, "Samples:   {}", stats.sample_count)
            .map_err(|e| AppError::io(format!("Failed to format statistics: {}", e)))?;
        writeln!(output, "Mean:      {:.2}km", stats.mean)
            .map_err(|e| AppError::io(format!("Failed to format statistics: {}", e)))?;
        writeln!(output, "Min/Max:   {}km / {}km", stats.min, stats.max)
            .map_err(|e| AppError::io(format!("Failed to format statistics: {}", e)))?;
        write!(output, "Std Dev:   {:.2}km", stats.std_dev)
            .map_err(|e| AppError::io(format!("Failed to format statistics: {}", e)))?;

        Ok(output)
    }

    fn format_summary(&self, report: &MeasurementReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Measurement Summary:")
            .map_err(|e| AppError::io(format!("Failed to format summary: {}", e)))?;
        writeln!(output, "-------------------")
            .map_err(|e| AppError::io(format!("Failed to format summary: {}", e)))?;
        writeln!(output, "Command:        {}", report.command)
            .map_err(|e| AppError::io(format!("Failed to format summary: {}", e)))?;
        writeln!(output, "Runs:           {}", report.runs)
            .map_err(|e| AppError::io(format!("Failed to format summary: {}", e)))?;
        write!(
            output,
            "Total Duration: {}",
            self.format_duration(report.total_duration.as_secs_f64() * 1000.0)
        )
        .map_err(|e| AppError::io(format!("Failed to format summary: {}", e)))?;

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("ERROR: {}", error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("WARNING: {}", warning))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("SUCCESS: {}", message))
    }
}
