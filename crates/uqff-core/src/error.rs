//! Run-configuration errors raised before any computation starts

use thiserror::Error;

/// Invalid numeric configuration for a run.
///
/// These are the only errors the driver raises; everything inside a round
/// degrades to sentinel `0.0` values so a run always completes with a
/// rectangular result set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("time step must be positive (got dt = {dt})")]
    NonPositiveTimeStep { dt: f64 },

    #[error("end time {t_end} precedes start time {t_start}")]
    ReversedTimeRange { t_start: f64, t_end: f64 },

    #[error("parameter sweep needs at least 2 steps (got {steps})")]
    TooFewSweepSteps { steps: usize },

    #[error("sweep range is empty: max {max} must exceed min {min}")]
    EmptySweepRange { min: f64, max: f64 },
}
