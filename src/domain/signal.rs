use serde::Serialize;
use thiserror::Error;

/// Reduction failures
#[derive(Debug, Error, Clone, Copy, PartialEq, Serialize)]
pub enum SignalError {
    #[error("Insufficient data: requires {required} data points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Standard deviation is zero; cannot compute z-score")]
    ZeroVariance,
}

/// Momentum score with an explicit neutral fallback
///
/// A failed z-score on either series never propagates out of the momentum
/// path. It becomes `Neutral` and scores 0, which classifies as Hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MomentumScore {
    Scored {
        score: f64,
        price_z: f64,
        volume_z: f64,
    },
    Neutral {
        reason: SignalError,
    },
}

impl MomentumScore {
    pub fn scored(price_z: f64, volume_z: f64) -> Self {
        MomentumScore::Scored {
            score: price_z * volume_z,
            price_z,
            volume_z,
        }
    }

    pub fn neutral(reason: SignalError) -> Self {
        MomentumScore::Neutral { reason }
    }

    /// Scalar signal fed to the classifier
    pub fn value(&self) -> f64 {
        match self {
            MomentumScore::Scored { score, .. } => *score,
            MomentumScore::Neutral { .. } => 0.0,
        }
    }

    /// (price_z, volume_z), zeros when neutral
    pub fn components(&self) -> (f64, f64) {
        match self {
            MomentumScore::Scored { price_z, volume_z, .. } => (*price_z, *volume_z),
            MomentumScore::Neutral { .. } => (0.0, 0.0),
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, MomentumScore::Neutral { .. })
    }
}
