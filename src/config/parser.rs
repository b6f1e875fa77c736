//! Configuration parsing from CLI arguments and environment variables

use crate::{cli::Cli, config::env::EnvManager, error::Result, models::Config};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        // Start with default configuration
        let mut config = Config::default();

        // Load from environment file if it exists
        self.load_env_file()?;

        // Surface suspicious environment values before they are merged
        if self.cli.debug {
            self.audit_environment()?;
        }

        // Merge environment variables into config
        config.merge_from_env()?;

        // Override with CLI arguments
        self.apply_cli_overrides(&mut config)?;

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Load .env file if it exists
    fn load_env_file(&self) -> Result<()> {
        EnvManager::load_env_file(self.cli.debug)
    }

    /// Report invalid environment variables and .env entries to stderr
    fn audit_environment(&self) -> Result<()> {
        for warning in EnvManager::validate_current_env()? {
            eprintln!("{}", warning);
        }

        if let Some(warnings) = EnvManager::check_env_file()? {
            for warning in warnings {
                eprintln!("Warning in .env file: {}", warning);
            }
        }

        Ok(())
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) -> Result<()> {
        // Override run count if explicitly specified, even when the
        // requested value matches the built-in default
        if let Some(runs) = self.cli.runs {
            config.runs = runs;
        }

        // Explicit color flags win over environment and defaults
        if self.cli.color {
            config.enable_color = true;
        }
        if self.cli.no_color {
            config.enable_color = false;
        }

        // Set verbose and debug flags (these are CLI-only)
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        // Override the sampled command if one was given on the command line
        if !self.cli.command.is_empty() {
            config.command = self.cli.command.clone();
        }

        if config.debug {
            eprintln!("Applied CLI overrides to configuration");
            eprintln!(
                "Final config: command={}, runs={}, enable_color={}",
                config.command.join(" "),
                config.runs,
                config.enable_color
            );
        }

        Ok(())
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    let parser = ConfigParser::new(cli);
    parser.parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Command: {}", config.command.join(" ")));
    summary.push(format!("Runs: {}", config.runs));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
