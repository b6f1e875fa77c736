//! Command-line interface module with comprehensive help system

pub mod help;

pub use help::HelpSystem;

use clap::Parser;

/// Distance Sampler - average the distance reported by an external solver binary
#[derive(Parser, Debug, Clone)]
#[command(name = "dsampler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of runs to average over [default: 100]
    ///
    /// Left unset here so an explicit value always overrides the
    /// environment; the default applies after the merge.
    #[arg(short = 'r', long)]
    pub runs: Option<u32>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output (per-run progress and statistics)
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Show help for specific topic (config, env, examples, output)
    #[arg(long, value_name = "TOPIC")]
    pub help_topic: Option<String>,

    /// Command to sample, with its arguments (defaults to the reference
    /// solver binary when omitted)
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.runs == Some(0) {
            return Err("Run count must be greater than 0".to_string());
        }

        if let Some(first) = self.command.first() {
            if first.is_empty() {
                return Err("Command program cannot be empty".to_string());
            }
        }

        Ok(())
    }

    /// Check if help should be displayed for a specific topic
    pub fn should_show_topic_help(&self) -> bool {
        self.help_topic.is_some()
    }

    /// Get the help topic if specified
    pub fn get_help_topic(&self) -> Option<&str> {
        self.help_topic.as_deref()
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }

    /// Display help for the specified topic or main help
    pub fn display_help(&self) -> String {
        let help_system = HelpSystem::new();
        let use_colors = self.use_colors();

        if let Some(topic) = &self.help_topic {
            help_system
                .display_topic_help(topic, use_colors)
                .unwrap_or_else(|| {
                    format!(
                        "Unknown help topic: '{}'\n\nAvailable topics: config, env, examples, output\n\n{}",
                        topic,
                        help_system.display_main_help(use_colors)
                    )
                })
        } else {
            help_system.display_main_help(use_colors)
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Configuration Summary:\n");
        match self.runs {
            Some(runs) => summary.push_str(&format!("  Runs: {}\n", runs)),
            None => summary.push_str(&format!(
                "  Runs: {} (default)\n",
                crate::defaults::DEFAULT_RUNS
            )),
        }
        summary.push_str(&format!("  Colored output: {}\n", self.use_colors()));
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        if !self.command.is_empty() {
            summary.push_str(&format!("  Command: {}\n", self.command.join(" ")));
        }

        summary
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    // Check for common environment variables that indicate color support
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check for NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for FORCE_COLOR environment variable
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // On Windows, check for ANSICON or ConEmu
    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
