//! Configuration data model and validation

use crate::types::{AppError, CommandSpec, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The command to sample: program path followed by its arguments
    #[serde(default = "default_command")]
    pub command: Vec<String>,

    /// Number of runs to average over
    #[serde(default = "default_runs")]
    pub runs: u32,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: default_command(),
            runs: default_runs(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.command.is_empty() {
            return Err(AppError::config("Command cannot be empty"));
        }

        if self.command[0].is_empty() {
            return Err(AppError::config("Command program cannot be empty"));
        }

        // Rejected before any process is spawned; the mean of zero runs
        // is undefined.
        if self.runs == 0 {
            return Err(AppError::config("Run count must be greater than 0"));
        }

        Ok(())
    }

    /// Build the command spec for the measurement loop
    pub fn command_spec(&self) -> Result<CommandSpec> {
        CommandSpec::from_parts(&self.command)
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(command) = std::env::var("SAMPLE_COMMAND") {
            // Split on whitespace; quoting is not interpreted. Complex
            // command lines belong on the CLI.
            let parts: Vec<String> = command.split_whitespace().map(String::from).collect();
            if !parts.is_empty() {
                self.command = parts;
            }
        }

        if let Ok(runs) = std::env::var("SAMPLE_RUNS") {
            self.runs = runs
                .parse()
                .map_err(|e| AppError::config(format!("Invalid SAMPLE_RUNS value '{}': {}", runs, e)))?;
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.parse().map_err(|e| {
                AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e))
            })?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_command() -> Vec<String> {
    crate::defaults::DEFAULT_COMMAND
        .iter()
        .map(|&s| s.to_string())
        .collect()
}

fn default_runs() -> u32 {
    crate::defaults::DEFAULT_RUNS
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
