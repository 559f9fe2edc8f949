//! Decision Classifiers
//!
//! Two independent threshold policies:
//! - `PriceBandPolicy`: percentage band around a base price (moving average)
//! - `SymmetricScorePolicy`: fixed absolute band around zero (momentum score)
//!
//! Values exactly on a threshold classify as Hold.

use crate::domain::{Decision, LabelStyle};
use crate::ports::DecisionPolicy;
use crate::strategy::params::{MomentumParams, MovingAverageParams};

/// Buy above `base * upper`, sell below `base * lower`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBandPolicy {
    pub base_value: f64,
    pub upper_multiplier: f64,
    pub lower_multiplier: f64,
}

impl PriceBandPolicy {
    pub fn new(base_value: f64, params: &MovingAverageParams) -> Self {
        Self {
            base_value,
            upper_multiplier: params.upper_multiplier,
            lower_multiplier: params.lower_multiplier,
        }
    }

    pub fn upper_threshold(&self) -> f64 {
        self.base_value * self.upper_multiplier
    }

    pub fn lower_threshold(&self) -> f64 {
        self.base_value * self.lower_multiplier
    }
}

impl DecisionPolicy for PriceBandPolicy {
    fn classify(&self, signal: f64) -> Decision {
        if signal > self.upper_threshold() {
            Decision::Buy
        } else if signal < self.lower_threshold() {
            Decision::Sell
        } else {
            Decision::Hold
        }
    }
}

/// Buy above `+threshold`, sell below `-threshold`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricScorePolicy {
    pub threshold: f64,
}

impl SymmetricScorePolicy {
    pub fn new(params: &MomentumParams) -> Self {
        Self {
            threshold: params.threshold,
        }
    }
}

impl DecisionPolicy for SymmetricScorePolicy {
    fn classify(&self, signal: f64) -> Decision {
        if signal > self.threshold {
            Decision::Buy
        } else if signal < -self.threshold {
            Decision::Sell
        } else {
            Decision::Hold
        }
    }

    fn label_style(&self) -> LabelStyle {
        LabelStyle::Upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band() -> PriceBandPolicy {
        PriceBandPolicy::new(150.0, &MovingAverageParams::default())
    }

    #[test]
    fn test_price_band_thresholds() {
        let policy = band();
        assert!((policy.upper_threshold() - 150.75).abs() < 1e-9);
        assert!((policy.lower_threshold() - 149.25).abs() < 1e-9);
    }

    #[test]
    fn test_price_band_decisions() {
        let policy = band();
        assert_eq!(policy.classify(151.0), Decision::Buy);
        assert_eq!(policy.classify(149.0), Decision::Sell);
        assert_eq!(policy.classify(150.0), Decision::Hold);
        assert_eq!(policy.classify(150.7), Decision::Hold);
        assert_eq!(policy.label_style(), LabelStyle::Title);
    }

    #[test]
    fn test_price_band_boundaries_hold() {
        let policy = band();
        assert_eq!(policy.classify(policy.upper_threshold()), Decision::Hold);
        assert_eq!(policy.classify(policy.lower_threshold()), Decision::Hold);
    }

    #[test]
    fn test_symmetric_decisions() {
        let policy = SymmetricScorePolicy::new(&MomentumParams::default());
        assert_eq!(policy.classify(27.3), Decision::Buy);
        assert_eq!(policy.classify(-5.01), Decision::Sell);
        assert_eq!(policy.classify(0.0), Decision::Hold);
        assert_eq!(policy.classify(5.0), Decision::Hold);
        assert_eq!(policy.classify(-5.0), Decision::Hold);
        assert_eq!(policy.label_style(), LabelStyle::Upper);
    }

    #[test]
    fn test_nan_holds() {
        assert_eq!(band().classify(f64::NAN), Decision::Hold);
        let policy = SymmetricScorePolicy { threshold: 5.0 };
        assert_eq!(policy.classify(f64::NAN), Decision::Hold);
    }
}
