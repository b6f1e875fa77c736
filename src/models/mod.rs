//! Data models and structures for the distance sampler

pub mod config;
pub mod sample;

// Re-export main model types
pub use config::Config;
pub use sample::{Accumulator, MeasurementReport, RunRecord};
