//! Display-only statistics over the parsed distances of a measurement
//!
//! The canonical report line is computed from the accumulator; this module
//! only feeds the verbose statistics block.

use serde::{Deserialize, Serialize};

/// Statistical summary of the distances from a successful measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceStatistics {
    /// Arithmetic mean distance (kilometers)
    pub mean: f64,

    /// Smallest observed distance
    pub min: i64,

    /// Largest observed distance
    pub max: i64,

    /// Population standard deviation of the distances
    pub std_dev: f64,

    /// Number of samples included
    pub sample_count: usize,
}

impl DistanceStatistics {
    /// Calculate statistics from a collection of parsed distances.
    /// Returns `None` for an empty collection.
    pub fn from_values(values: &[i64]) -> Option<Self> {
        let count = values.len();
        if count == 0 {
            return None;
        }

        let sum: i128 = values.iter().map(|&v| v as i128).sum();
        let mean = sum as f64 / count as f64;

        let min = values.iter().copied().fold(i64::MAX, i64::min);
        let max = values.iter().copied().fold(i64::MIN, i64::max);

        let variance = if count > 1 {
            values
                .iter()
                .map(|&v| (v as f64 - mean).powi(2))
                .sum::<f64>()
                / count as f64
        } else {
            0.0
        };

        Some(Self {
            mean,
            min,
            max,
            std_dev: variance.sqrt(),
            sample_count: count,
        })
    }

    /// Spread between the largest and smallest distance
    pub fn range(&self) -> i64 {
        self.max - self.min
    }
}
