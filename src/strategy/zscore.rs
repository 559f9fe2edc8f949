//! Z-Score
//!
//! Standardized deviation of the latest observation from the full series.
//!
//! Z-Score Formula: z = (latest - mean) / sample_std_dev
//!
//! The sample standard deviation uses the n - 1 denominator, so at least
//! two observations are required.

use serde::Serialize;
use statrs::statistics::Statistics;

use crate::domain::SignalError;

/// Minimum observations for a sample standard deviation
pub const MIN_ZSCORE_POINTS: usize = 2;

/// Result of z-score calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZScoreResult {
    /// Current z-score value
    pub z_score: f64,
    /// Mean of the full series
    pub mean: f64,
    /// Sample standard deviation of the full series
    pub std_dev: f64,
    /// Latest observation
    pub latest: f64,
}

/// Z-score of the last element relative to the whole series
pub fn z_score(values: &[f64]) -> Result<ZScoreResult, SignalError> {
    if values.len() < MIN_ZSCORE_POINTS {
        return Err(SignalError::InsufficientData {
            required: MIN_ZSCORE_POINTS,
            actual: values.len(),
        });
    }

    let latest = values[values.len() - 1];

    // Constant series: accumulated rounding must not leak a tiny stdev
    if values.iter().all(|&v| v == latest) {
        return Err(SignalError::ZeroVariance);
    }

    let mean = values.iter().mean();
    let std_dev = values.iter().std_dev();
    if !(std_dev > 0.0) {
        return Err(SignalError::ZeroVariance);
    }

    Ok(ZScoreResult {
        z_score: (latest - mean) / std_dev,
        mean,
        std_dev,
        latest,
    })
}
