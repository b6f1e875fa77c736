//! Run records, the accumulator, and the final measurement report

use crate::error::{AppError, Result};
use crate::stats::DistanceStatistics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One completed run of the external command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// 1-based run index
    pub index: u32,

    /// Distance parsed from the command's stdout (kilometers)
    pub value: i64,

    /// Wall duration of the invocation
    pub duration: Duration,

    /// Timestamp when the run completed
    pub timestamp: DateTime<Utc>,
}

impl RunRecord {
    /// Create a record for a run that just completed
    pub fn new(index: u32, value: i64, duration: Duration) -> Self {
        Self {
            index,
            value,
            duration,
            timestamp: Utc::now(),
        }
    }
}

/// Running sum and count for the measurement loop.
///
/// The sum is i128 so no sequence of i64 samples can overflow it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Accumulator {
    sum: i128,
    count: u32,
}

impl Accumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one parsed distance to the running sum
    pub fn add(&mut self, value: i64) {
        self.sum += value as i128;
        self.count += 1;
    }

    /// Number of values accumulated so far
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Running sum of all accumulated values
    pub fn sum(&self) -> i128 {
        self.sum
    }

    /// Arithmetic mean of the accumulated values, as floating-point
    /// division of sum by count. Empty accumulators have no mean.
    pub fn mean(&self) -> Result<f64> {
        if self.count == 0 {
            return Err(AppError::internal(
                "Cannot compute the mean of zero runs",
            ));
        }
        Ok(self.sum as f64 / self.count as f64)
    }
}

/// Final result of a successful measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementReport {
    /// The command line that was sampled, rendered for display
    pub command: String,

    /// Number of runs performed
    pub runs: u32,

    /// Arithmetic mean of the parsed distances
    pub mean: f64,

    /// When the measurement started
    pub started_at: DateTime<Utc>,

    /// When the measurement completed
    pub completed_at: DateTime<Utc>,

    /// Total wall duration of the measurement loop
    pub total_duration: Duration,

    /// Derived distance statistics for verbose output
    pub statistics: Option<DistanceStatistics>,
}

impl MeasurementReport {
    /// Build a report from a completed accumulator and the run records
    pub fn from_runs(
        command: String,
        accumulator: &Accumulator,
        records: &[RunRecord],
        started_at: DateTime<Utc>,
        total_duration: Duration,
    ) -> Result<Self> {
        let mean = accumulator.mean()?;
        let values: Vec<i64> = records.iter().map(|r| r.value).collect();

        Ok(Self {
            command,
            runs: accumulator.count(),
            mean,
            started_at,
            completed_at: Utc::now(),
            total_duration,
            statistics: DistanceStatistics::from_values(&values),
        })
    }
}
