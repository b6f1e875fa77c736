//! Colored formatter implementation with terminal color support
//!
//! Decorates the verbose statistics block, headers, and status messages
//! with ANSI colors. The canonical report line passes through the plain
//! formatter untouched so its text is stable for scripts and tests.

use super::formatter::{FormattingOptions, OutputFormatter, PlainFormatter};
use crate::{
    error::Result,
    models::MeasurementReport,
    stats::DistanceStatistics,
};
use colored::*;

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            muted: Color::BrightBlack,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    plain_formatter: PlainFormatter,
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            plain_formatter: PlainFormatter::new(),
            options,
            color_scheme: ColorScheme::default(),
        }
    }

    /// Create a colored formatter with custom color scheme
    pub fn with_color_scheme(options: FormattingOptions, color_scheme: ColorScheme) -> Self {
        Self {
            plain_formatter: PlainFormatter::new(),
            options,
            color_scheme,
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Apply bold formatting if colors are enabled
    fn bold(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold()
        } else {
            text.normal()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let plain = self.plain_formatter.format_header(title)?;
        if self.options.enable_color {
            Ok(plain.color(self.color_scheme.header).bold().to_string())
        } else {
            Ok(plain)
        }
    }

    fn format_report_line(&self, report: &MeasurementReport) -> Result<String> {
        // Canonical line is never colorized
        self.plain_formatter.format_report_line(report)
    }

    fn format_statistics(&self, stats: &DistanceStatistics) -> Result<String> {
        let plain = self.plain_formatter.format_statistics(stats)?;
        let mut lines = plain.lines();

        let mut output = String::new();
        if let Some(title) = lines.next() {
            output.push_str(&self.bold(title).to_string());
        }
        for line in lines {
            output.push('\n');
            if line.chars().all(|c| c == '-') {
                output.push_str(&self.colorize(line, self.color_scheme.muted).to_string());
            } else {
                output.push_str(&self.colorize(line, self.color_scheme.info).to_string());
            }
        }

        Ok(output)
    }

    fn format_summary(&self, report: &MeasurementReport) -> Result<String> {
        let plain = self.plain_formatter.format_summary(report)?;
        let mut lines = plain.lines();

        let mut output = String::new();
        if let Some(title) = lines.next() {
            output.push_str(&self.bold(title).to_string());
        }
        for line in lines {
            output.push('\n');
            if line.chars().all(|c| c == '-') {
                output.push_str(&self.colorize(line, self.color_scheme.muted).to_string());
            } else {
                output.push_str(line);
            }
        }

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        if !self.options.enable_color {
            return self.plain_formatter.format_error(error);
        }
        Ok(format!(
            "{} {}",
            "ERROR:".color(self.color_scheme.error).bold(),
            error.color(self.color_scheme.error)
        ))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        if !self.options.enable_color {
            return self.plain_formatter.format_warning(warning);
        }
        Ok(format!(
            "{} {}",
            "WARNING:".color(self.color_scheme.warning).bold(),
            warning.color(self.color_scheme.warning)
        ))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        if !self.options.enable_color {
            return self.plain_formatter.format_success(message);
        }
        Ok(format!(
            "{} {}",
            "SUCCESS:".color(self.color_scheme.success).bold(),
            message.color(self.color_scheme.success)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Accumulator, RunRecord};
    use chrono::Utc;
    use std::time::Duration;

    fn report(values: &[i64]) -> MeasurementReport {
        let mut acc = Accumulator::new();
        let mut records = Vec::new();
        for (i, &v) in values.iter().enumerate() {
            acc.add(v);
            records.push(RunRecord::new(i as u32 + 1, v, Duration::from_millis(1)));
        }
        MeasurementReport::from_runs(
            "./solver".to_string(),
            &acc,
            &records,
            Utc::now(),
            Duration::from_millis(values.len() as u64),
        )
        .unwrap()
    }

    fn no_color_formatter() -> ColoredFormatter {
        ColoredFormatter::new(FormattingOptions {
            enable_color: false,
        })
    }

    #[test]
    fn test_report_line_matches_plain() {
        let colored = no_color_formatter();
        let plain = PlainFormatter::new();
        let report = report(&[10; 100]);

        assert_eq!(
            colored.format_report_line(&report).unwrap(),
            plain.format_report_line(&report).unwrap()
        );
    }

    #[test]
    fn test_report_line_never_colorized() {
        // Even with color enabled the canonical line carries no ANSI codes
        let formatter = ColoredFormatter::new(FormattingOptions { enable_color: true });
        let line = formatter.format_report_line(&report(&[10, 20])).unwrap();
        assert!(!line.contains('\x1b'));
        assert_eq!(line, "average distance on 2 runs is: 15.0km");
    }

    #[test]
    fn test_statistics_content_preserved() {
        let formatter = no_color_formatter();
        let stats = DistanceStatistics::from_values(&[10, 20, 30]).unwrap();
        let block = formatter.format_statistics(&stats).unwrap();

        assert!(block.contains("Samples:   3"));
        assert!(block.contains("Min/Max:   10km / 30km"));
    }

    #[test]
    fn test_custom_color_scheme_without_color() {
        let scheme = ColorScheme {
            error: Color::Magenta,
            ..ColorScheme::default()
        };
        let formatter = ColoredFormatter::with_color_scheme(
            FormattingOptions {
                enable_color: false,
            },
            scheme,
        );

        assert_eq!(formatter.format_error("bad").unwrap(), "ERROR: bad");
    }

    #[test]
    fn test_message_formatting_without_color() {
        let formatter = no_color_formatter();
        assert_eq!(formatter.format_error("bad").unwrap(), "ERROR: bad");
        assert_eq!(formatter.format_warning("meh").unwrap(), "WARNING: meh");
    }
}
