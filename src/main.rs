//! Distance Sampler - Main CLI Application
//!
//! Repeatedly runs an external solver binary, parses the distance it
//! prints on stdout, and reports the average over all runs.

use clap::Parser;
use distance_sampler::{
    cli::Cli,
    config::parser::{display_config_summary, load_config},
    config::validation::validate_config,
    error::{AppError, Result},
    output::{OutputCoordinator, OutputFormatterFactory},
    sampler::{Sampler, SequentialSampler},
    PKG_NAME, VERSION,
};
use std::process;

#[tokio::main]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!(
            "Please report this issue at: https://github.com/MaurUppi/distance-sampler/issues"
        );
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    // Topic help short-circuits the whole run
    if cli.should_show_topic_help() {
        println!("{}", cli.display_help());
        return;
    }

    if let Err(e) = run_application(cli).await {
        // The failure contract: one line on stderr, non-zero exit
        eprintln!("{}", e.failure_line());

        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    // CLI-level conflicts are configuration errors
    cli.validate().map_err(AppError::config)?;

    // Show debug info if requested
    if cli.debug {
        eprintln!("{} v{}", PKG_NAME, VERSION);
        eprintln!(
            "Built {} from {} ({})",
            env!("BUILD_TIME"),
            option_env!("GIT_COMMIT").unwrap_or("unknown"),
            option_env!("GIT_BRANCH").unwrap_or("unknown")
        );
        eprintln!("Target: {}", env!("TARGET_TRIPLE"));
        eprintln!();
    }

    // Load and validate configuration
    let config = load_config(cli)?;

    if config.debug {
        eprintln!("Configuration loaded successfully:");
        for line in display_config_summary(&config).lines() {
            eprintln!("  {}", line);
        }
        eprintln!();
    }

    // Surface advisory warnings before the first run
    if config.verbose || config.debug {
        let warnings = validate_config(&config)?;
        let coordinator = OutputCoordinator::new(
            OutputFormatterFactory::create_formatter(config.enable_color),
            config.verbose,
        );
        for warning in &warnings {
            eprintln!("{}", coordinator.display_warning(&warning.format(config.enable_color))?);
        }
    }

    let command = config.command_spec()?;

    if config.verbose || config.debug {
        println!(
            "Sampling '{}' over {} runs...",
            command.display(),
            config.runs
        );
        println!();
    }

    // Execute the sampling loop
    let sampler = SequentialSampler::new(&config);
    let report = sampler.sample(&command).await?;

    // Assemble and print the report
    let formatter = OutputFormatterFactory::create_formatter(config.enable_color);
    let coordinator = OutputCoordinator::new(formatter, config.verbose);

    let output = coordinator.display_report(&report)?;
    println!("{}", output);

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - SAMPLE_RUNS and --runs must be greater than 0");
            eprintln!("  - The command must name an executable, optionally with arguments");
        }
        AppError::Spawn(_) => {
            eprintln!();
            eprintln!("Spawn troubleshooting:");
            eprintln!("  - Verify the program path and that it is executable");
            eprintln!("  - Bare program names are resolved through PATH");
            eprintln!("  - Build the solver first if it lives under target/debug");
        }
        AppError::OutputParse(_) => {
            eprintln!();
            eprintln!("Output parsing help:");
            eprintln!("  - The first whitespace-delimited token of the command's stdout");
            eprintln!("    must be an integer distance in kilometres");
            eprintln!("  - Run the command by hand to inspect what it prints");
        }
        _ => {}
    }
}
