//! Command-line help system with examples and detailed guidance
//!
//! This module provides detailed help text, usage examples, and contextual guidance
//! to help users effectively use the distance sampler.

use crate::config::env::EnvManager;
use colored::*;

/// Comprehensive help system for the CLI application
pub struct HelpSystem;

impl HelpSystem {
    /// Create a new help system
    pub fn new() -> Self {
        Self
    }

    /// Display the main help message with all available options
    pub fn display_main_help(&self, use_colors: bool) -> String {
        let mut help = String::new();

        help.push_str(&self.format_header(use_colors));
        help.push('\n');
        help.push_str(&self.format_usage_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_options_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_examples_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_environment_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_footer(use_colors));

        help
    }

    /// Display quick help for specific topics
    pub fn display_topic_help(&self, topic: &str, use_colors: bool) -> Option<String> {
        match topic.to_lowercase().as_str() {
            "config" | "configuration" => Some(self.format_configuration_help(use_colors)),
            "env" | "environment" => Some(self.format_environment_help(use_colors)),
            "examples" => Some(self.format_examples_section(use_colors)),
            "output" | "formatting" => Some(self.format_output_help(use_colors)),
            _ => None,
        }
    }

    /// Format the main header
    fn format_header(&self, use_colors: bool) -> String {
        let title = "Distance Sampler";
        let subtitle = "Averages the distance reported by repeated runs of a solver binary";
        let version = env!("CARGO_PKG_VERSION");

        if use_colors {
            format!(
                "{}\n{}\nVersion: {}\n",
                title.bright_cyan().bold(),
                subtitle.bright_blue(),
                version.green()
            )
        } else {
            format!("{}\n{}\nVersion: {}\n", title, subtitle, version)
        }
    }

    /// Format the usage section
    fn format_usage_section(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "USAGE:".bright_green().bold().to_string()
        } else {
            "USAGE:".to_string()
        };

        let usage_patterns = vec![
            "dsampler [OPTIONS]",
            "dsampler [OPTIONS] -- <COMMAND> [ARGS...]",
            "dsampler --help-topic <TOPIC>",
        ];

        let mut usage = format!("{}\n", header);
        for pattern in usage_patterns {
            if use_colors {
                usage.push_str(&format!("  {}\n", pattern.bright_white()));
            } else {
                usage.push_str(&format!("  {}\n", pattern));
            }
        }

        usage
    }

    /// Format the options section
    fn format_options_section(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "OPTIONS:".bright_green().bold().to_string()
        } else {
            "OPTIONS:".to_string()
        };

        let options = vec![
            OptionHelp {
                short: Some("r"),
                long: "runs",
                value: "<NUMBER>",
                description: "Number of runs to average over (must be greater than 0)",
                example: Some("--runs 100"),
            },
            OptionHelp {
                short: None,
                long: "color",
                value: "",
                description: "Force colored output",
                example: Some("--color"),
            },
            OptionHelp {
                short: None,
                long: "no-color",
                value: "",
                description: "Disable colored output",
                example: Some("--no-color"),
            },
            OptionHelp {
                short: None,
                long: "verbose",
                value: "",
                description: "Enable verbose output with per-run progress and statistics",
                example: Some("--verbose"),
            },
            OptionHelp {
                short: None,
                long: "debug",
                value: "",
                description: "Enable debug output with diagnostic information",
                example: Some("--debug"),
            },
            OptionHelp {
                short: None,
                long: "help-topic",
                value: "<TOPIC>",
                description: "Show help for a specific topic (config, env, examples, output)",
                example: Some("--help-topic env"),
            },
        ];

        let mut output = format!("{}\n", header);
        for option in options {
            output.push_str(&option.format(use_colors));
            output.push('\n');
        }

        output
    }

    /// Format the examples section
    fn format_examples_section(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "EXAMPLES:".bright_green().bold().to_string()
        } else {
            "EXAMPLES:".to_string()
        };

        let examples = vec![
            ExampleHelp {
                title: "Default sampling",
                command: "dsampler",
                description: "Run the default solver binary 100 times and report the average",
            },
            ExampleHelp {
                title: "Custom run count",
                command: "dsampler --runs 10",
                description: "Average the solver output over 10 runs",
            },
            ExampleHelp {
                title: "Custom command",
                command: "dsampler --runs 20 -- ./my-solver --seed 7",
                description: "Sample a custom command; everything after -- is passed through",
            },
            ExampleHelp {
                title: "Verbose progress",
                command: "dsampler --runs 5 --verbose",
                description: "Print each run's value and timing alongside the average",
            },
            ExampleHelp {
                title: "Script-friendly output",
                command: "dsampler --no-color",
                description: "Plain text output for logs and pipelines",
            },
        ];

        let mut output = format!("{}\n", header);
        for example in examples {
            output.push_str(&example.format(use_colors));
            output.push('\n');
        }

        output
    }

    /// Format the environment variables section
    fn format_environment_section(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "ENVIRONMENT VARIABLES:".bright_green().bold().to_string()
        } else {
            "ENVIRONMENT VARIABLES:".to_string()
        };

        let env_vars = EnvManager::get_supported_env_vars();

        let mut output = format!("{}\n", header);
        output.push_str(
            "Configuration priority: CLI arguments > Environment variables > Defaults\n\n",
        );

        for (var_name, description, _example) in env_vars {
            if use_colors {
                output.push_str(&format!(
                    "  {}: {}\n",
                    var_name.bright_yellow().bold(),
                    description.white()
                ));
            } else {
                output.push_str(&format!("  {}: {}\n", var_name, description));
            }
        }

        output.push_str("\nExample .env file:\n");
        if use_colors {
            output.push_str(&format!(
                "  {}\n",
                "SAMPLE_COMMAND=./target/debug/projekat_2025".bright_blue()
            ));
            output.push_str(&format!("  {}\n", "SAMPLE_RUNS=100".bright_blue()));
            output.push_str(&format!("  {}\n", "ENABLE_COLOR=true".bright_blue()));
        } else {
            output.push_str("  SAMPLE_COMMAND=./target/debug/projekat_2025\n");
            output.push_str("  SAMPLE_RUNS=100\n");
            output.push_str("  ENABLE_COLOR=true\n");
        }

        output
    }

    /// Format the footer with additional resources
    fn format_footer(&self, use_colors: bool) -> String {
        let mut footer = String::new();

        if use_colors {
            footer.push_str(&format!("{}\n", "ADDITIONAL HELP:".bright_green().bold()));
        } else {
            footer.push_str("ADDITIONAL HELP:\n");
        }

        let help_topics = vec![
            ("--help-topic config", "Configuration priority and limits"),
            ("--help-topic env", "Environment variable details"),
            ("--help-topic examples", "More detailed usage examples"),
            ("--help-topic output", "Output formatting and interpretation"),
        ];

        for (command, description) in help_topics {
            if use_colors {
                footer.push_str(&format!(
                    "  {}: {}\n",
                    command.bright_yellow(),
                    description.white()
                ));
            } else {
                footer.push_str(&format!("  {}: {}\n", command, description));
            }
        }

        footer
    }

    /// Format detailed configuration help
    fn format_configuration_help(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "CONFIGURATION REFERENCE:".bright_green().bold().to_string()
        } else {
            "CONFIGURATION REFERENCE:".to_string()
        };

        let mut help = format!("{}\n\n", header);

        help.push_str("CONFIGURATION PRIORITY (highest to lowest):\n");
        help.push_str("1. Command-line arguments\n");
        help.push_str("2. Environment variables (shell or .env file)\n");
        help.push_str("3. Default values\n\n");

        help.push_str("PARAMETER LIMITS:\n");
        help.push_str("- Runs: must be greater than 0\n");
        help.push_str("- Command: any executable with its arguments; the first whitespace-\n");
        help.push_str("  delimited token of its stdout must be an integer distance in km\n\n");

        help.push_str("DEFAULTS:\n");
        help.push_str(&format!(
            "- Runs: {}\n",
            crate::defaults::DEFAULT_RUNS
        ));
        help.push_str(&format!(
            "- Command: {}\n",
            crate::defaults::DEFAULT_COMMAND.join(" ")
        ));

        help
    }

    /// Format detailed environment help
    fn format_environment_help(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "ENVIRONMENT VARIABLES REFERENCE:"
                .bright_green()
                .bold()
                .to_string()
        } else {
            "ENVIRONMENT VARIABLES REFERENCE:".to_string()
        };

        let mut help = format!("{}\n\n", header);

        help.push_str("LOADING ORDER:\n");
        help.push_str("1. System environment variables\n");
        help.push_str("2. .env file in current directory (if present)\n");
        help.push_str("3. Command-line arguments (override both)\n\n");

        help.push_str("SUPPORTED VARIABLES:\n");
        let env_vars = EnvManager::get_supported_env_vars();
        for (var_name, description, example) in env_vars {
            if use_colors {
                help.push_str(&format!(
                    "{}:\n  {}\n  Example: {}\n\n",
                    var_name.bright_yellow().bold(),
                    description.white(),
                    example.bright_blue().italic()
                ));
            } else {
                help.push_str(&format!(
                    "{}:\n  {}\n  Example: {}\n\n",
                    var_name, description, example
                ));
            }
        }

        help.push_str("EXAMPLE .env FILE:\n");
        help.push_str(&EnvManager::create_example_env_content());

        help
    }

    /// Format output formatting help
    fn format_output_help(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "OUTPUT FORMATTING REFERENCE:".bright_green().bold().to_string()
        } else {
            "OUTPUT FORMATTING REFERENCE:".to_string()
        };

        let mut help = format!("{}\n\n", header);

        help.push_str("OUTPUT MODES:\n");
        help.push_str("- Default: the single report line on stdout\n");
        help.push_str("- --verbose: per-run progress plus summary statistics\n");
        help.push_str("- --debug: diagnostic log entries on stderr\n");
        help.push_str("- --no-color: plain text output for scripts/logs\n\n");

        help.push_str("REPORT LINE:\n");
        help.push_str("  average distance on <N> runs is: <MEAN>km\n");
        help.push_str("The report line is always plain text on stdout, even when colors\n");
        help.push_str("are enabled, so it stays stable for scripting.\n\n");

        help.push_str("FAILURE HANDLING:\n");
        help.push_str("If any run fails to start, exits with a non-zero status, or prints\n");
        help.push_str("output whose first token is not an integer, sampling stops and a\n");
        help.push_str("single line is written to stderr:\n");
        help.push_str("  Failed to run the command: <details>\n\n");

        help.push_str("STATISTICS REPORTED (--verbose):\n");
        help.push_str("- Minimum, maximum and mean distance\n");
        help.push_str("- Standard deviation across runs\n");
        help.push_str("- Total sampling duration\n");

        help
    }
}

impl Default for HelpSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for formatting command-line options
struct OptionHelp {
    short: Option<&'static str>,
    long: &'static str,
    value: &'static str,
    description: &'static str,
    example: Option<&'static str>,
}

impl OptionHelp {
    fn format(&self, use_colors: bool) -> String {
        let flag_part = match self.short {
            Some(short) => format!("-{}, --{}", short, self.long),
            None => format!("    --{}", self.long),
        };

        let flag_with_value = if self.value.is_empty() {
            flag_part
        } else {
            format!("{} {}", flag_part, self.value)
        };

        let mut output = if use_colors {
            format!(
                "  {}\n      {}\n",
                flag_with_value.bright_yellow(),
                self.description.white()
            )
        } else {
            format!("  {}\n      {}\n", flag_with_value, self.description)
        };

        if let Some(example) = self.example {
            if use_colors {
                output.push_str(&format!("      Example: {}\n", example.bright_blue().italic()));
            } else {
                output.push_str(&format!("      Example: {}\n", example));
            }
        }

        output
    }
}

/// Helper struct for formatting usage examples
struct ExampleHelp {
    title: &'static str,
    command: &'static str,
    description: &'static str,
}

impl ExampleHelp {
    fn format(&self, use_colors: bool) -> String {
        if use_colors {
            format!(
                "  {}\n    {}\n    {}\n",
                self.title.bright_cyan().bold(),
                self.command.bright_white(),
                self.description.white()
            )
        } else {
            format!(
                "  {}\n    {}\n    {}\n",
                self.title, self.command, self.description
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_help_contains_sections() {
        let help_system = HelpSystem::new();
        let help = help_system.display_main_help(false);

        assert!(help.contains("Distance Sampler"));
        assert!(help.contains("USAGE:"));
        assert!(help.contains("OPTIONS:"));
        assert!(help.contains("EXAMPLES:"));
        assert!(help.contains("ENVIRONMENT VARIABLES:"));
        assert!(help.contains("--runs"));
        assert!(help.contains("SAMPLE_COMMAND"));
    }

    #[test]
    fn test_topic_help_known_topics() {
        let help_system = HelpSystem::new();

        let config = help_system.display_topic_help("config", false);
        assert!(config.unwrap().contains("CONFIGURATION REFERENCE:"));

        let env = help_system.display_topic_help("env", false);
        assert!(env.unwrap().contains("ENVIRONMENT VARIABLES REFERENCE:"));

        let examples = help_system.display_topic_help("examples", false);
        assert!(examples.unwrap().contains("EXAMPLES:"));

        let output = help_system.display_topic_help("output", false);
        assert!(output.unwrap().contains("OUTPUT FORMATTING REFERENCE:"));
    }

    #[test]
    fn test_topic_help_aliases_and_case() {
        let help_system = HelpSystem::new();

        assert!(help_system.display_topic_help("configuration", false).is_some());
        assert!(help_system.display_topic_help("environment", false).is_some());
        assert!(help_system.display_topic_help("formatting", false).is_some());
        assert!(help_system.display_topic_help("ENV", false).is_some());
    }

    #[test]
    fn test_topic_help_unknown_topic() {
        let help_system = HelpSystem::new();
        assert!(help_system.display_topic_help("nonsense", false).is_none());
    }

    #[test]
    fn test_output_help_mentions_report_line() {
        let help_system = HelpSystem::new();
        let help = help_system.display_topic_help("output", false).unwrap();
        assert!(help.contains("average distance on <N> runs is: <MEAN>km"));
        assert!(help.contains("Failed to run the command:"));
    }
}
