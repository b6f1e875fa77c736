//! Distance Sampler
//!
//! A command-line sampling tool that repeatedly runs an external solver
//! binary, parses the distance it prints to stdout, and reports the average
//! distance across all runs.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;
pub mod sampler;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Accumulator, Config, MeasurementReport, RunRecord};
pub use output::{
    ColoredFormatter, OutputCoordinator, OutputFormatter, OutputFormatterFactory, PlainFormatter,
};
pub use sampler::{Sampler, SequentialSampler};
pub use stats::DistanceStatistics;
pub use types::CommandSpec;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    /// Number of runs to average over
    pub const DEFAULT_RUNS: u32 = 100;

    /// The measured solver binary, invoked with no arguments
    pub const DEFAULT_COMMAND: &[&str] = &["./target/debug/projekat_2025"];

    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
