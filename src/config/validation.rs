//! Configuration validation utilities and rules

use crate::{error::Result, models::Config};
use std::path::Path;

/// Configuration validator with advanced validation rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration with comprehensive checks
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        // Basic validation (already done in Config::validate)
        config.validate()?;

        warnings.extend(Self::validate_command(config)?);
        warnings.extend(Self::validate_run_settings(config)?);

        Ok(warnings)
    }

    /// Validate the sampled command with path checks
    fn validate_command(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        if let Some(program) = config.command.first() {
            // Path-like programs can be checked up front; bare names
            // resolve through PATH at spawn time.
            if program.contains('/') && !Path::new(program).exists() {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Warning,
                    format!(
                        "Command '{}' does not exist at that path, the first run will fail to start",
                        program
                    ),
                ));
            }
        }

        Ok(warnings)
    }

    /// Validate run-count settings
    fn validate_run_settings(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        if config.runs < 10 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!(
                    "Run count of {} may not produce a stable average (recommended: >= 10)",
                    config.runs
                ),
            ));
        } else if config.runs > 1000 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("High run count of {} will increase execution time", config.runs),
            ));
        }

        Ok(warnings)
    }
}

/// Validation warning levels
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    Info,
    Warning,
    Error,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

/// Configuration validation warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, _use_color: bool) -> String {
        format!("[{}] {}", self.level.as_str(), self.message)
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}
