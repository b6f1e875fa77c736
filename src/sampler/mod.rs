//! The measurement loop
//!
//! Runs the external command N times in strict sequence, parses the
//! distance from each run's stdout, and produces the final report. Any
//! failure aborts the remaining runs; no partial average is ever reported.

use crate::{
    error::{AppError, Result},
    logging::Logger,
    models::{Accumulator, Config, MeasurementReport, RunRecord},
    parser::parse_distance,
    types::CommandSpec,
};
use async_trait::async_trait;
use chrono::Utc;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// Longest stderr excerpt embedded in a command-failure message
const STDERR_EXCERPT_MAX: usize = 200;

/// Sampler configuration derived from the application config
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Number of runs to perform
    pub runs: u32,
    /// Print per-run progress lines
    pub verbose: bool,
    /// Emit structured log events
    pub debug: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            runs: crate::defaults::DEFAULT_RUNS,
            verbose: false,
            debug: false,
        }
    }
}

impl From<&Config> for SamplerConfig {
    fn from(config: &Config) -> Self {
        Self {
            runs: config.runs,
            verbose: config.verbose,
            debug: config.debug,
        }
    }
}

/// High-level sampling interface
#[async_trait]
pub trait Sampler {
    /// Run the measurement loop for the given command and compute the mean
    async fn sample(&self, command: &CommandSpec) -> Result<MeasurementReport>;
}

/// Sequential sampler: one child process at a time, each reaped before the
/// next is spawned.
pub struct SequentialSampler {
    config: SamplerConfig,
    logger: Logger,
}

impl SequentialSampler {
    /// Create a sampler from the application config
    pub fn new(config: &Config) -> Self {
        Self {
            config: SamplerConfig::from(config),
            logger: Logger::with_config("sampler".to_string(), config),
        }
    }

    /// Create a sampler from a bare sampler config (used by tests)
    pub fn with_sampler_config(config: SamplerConfig) -> Self {
        Self {
            config,
            logger: Logger::new("sampler".to_string()),
        }
    }

    /// Execute one run: spawn, wait, capture, parse.
    ///
    /// Output is captured, never streamed; stdin is null. The child is
    /// awaited to completion here, so it is always reaped before the
    /// caller starts the next run.
    async fn run_once(&self, command: &CommandSpec, run_index: u32) -> Result<i64> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                AppError::spawn(format!("'{}': {}", command.display(), e))
            })?;

        if !output.status.success() {
            let mut message = format!(
                "'{}' exited with {} on run {}",
                command.display(),
                output.status,
                run_index
            );
            if let Some(excerpt) = stderr_excerpt(&output.stderr) {
                message.push_str(&format!(" (stderr: {})", excerpt));
            }
            return Err(AppError::command_failed(message));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            AppError::output_parse(format!("run {} produced non-UTF-8 output: {}", run_index, e))
        })?;

        parse_distance(&stdout)
    }
}

#[async_trait]
impl Sampler for SequentialSampler {
    async fn sample(&self, command: &CommandSpec) -> Result<MeasurementReport> {
        if self.config.runs == 0 {
            return Err(AppError::config("Run count must be greater than 0"));
        }

        if self.config.debug {
            self.logger
                .debug("Starting measurement")
                .field("command", command.display())
                .field("runs", self.config.runs)
                .log();
        }

        let started_at = Utc::now();
        let loop_start = Instant::now();
        let mut accumulator = Accumulator::new();
        let mut records = Vec::with_capacity(self.config.runs as usize);

        for run in 1..=self.config.runs {
            let run_start = Instant::now();
            let value = self.run_once(command, run).await?;
            let duration = run_start.elapsed();

            accumulator.add(value);
            records.push(RunRecord::new(run, value, duration));

            if self.config.verbose {
                println!(
                    "Completed run {}/{}: {}km ({:.1}ms)",
                    run,
                    self.config.runs,
                    value,
                    duration.as_secs_f64() * 1000.0
                );
            }

            if self.config.debug {
                self.logger
                    .debug("Run completed")
                    .field("run", run)
                    .field("distance_km", value)
                    .field("duration_ms", duration.as_secs_f64() * 1000.0)
                    .log();
            }
        }

        let report = MeasurementReport::from_runs(
            command.display(),
            &accumulator,
            &records,
            started_at,
            loop_start.elapsed(),
        )?;

        if self.config.debug {
            self.logger
                .debug("Measurement completed")
                .field("runs", report.runs)
                .field("mean_km", report.mean)
                .field("total_duration_ms", report.total_duration.as_secs_f64() * 1000.0)
                .log();
        }

        Ok(report)
    }
}

/// First non-empty stderr line, trimmed and capped for embedding in an
/// error message. Returns `None` when stderr was empty or not UTF-8.
fn stderr_excerpt(stderr: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(stderr).ok()?;
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    Some(line.chars().take(STDERR_EXCERPT_MAX).collect())
}
