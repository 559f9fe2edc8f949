//! Strategy Parameters
//!
//! Threshold settings for the two decision strategies.
//! Defaults reproduce the BRAND demo settings.

use serde::{Deserialize, Serialize};

/// Moving average + price band configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingAverageParams {
    /// Number of trailing points averaged
    pub window_size: usize,
    /// Buy above base_price * upper_multiplier
    pub upper_multiplier: f64,
    /// Sell below base_price * lower_multiplier
    pub lower_multiplier: f64,
}

impl Default for MovingAverageParams {
    fn default() -> Self {
        Self {
            window_size: 10,
            upper_multiplier: 1.005,
            lower_multiplier: 0.995,
        }
    }
}

impl MovingAverageParams {
    pub fn with_window(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_band(mut self, lower_multiplier: f64, upper_multiplier: f64) -> Self {
        self.lower_multiplier = lower_multiplier;
        self.upper_multiplier = upper_multiplier;
        self
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.window_size == 0 {
            return Err(ParamsError::InvalidWindow(self.window_size));
        }
        if !(self.lower_multiplier > 0.0)
            || !(self.upper_multiplier > 0.0)
            || self.lower_multiplier > self.upper_multiplier
        {
            return Err(ParamsError::InvalidBand {
                lower: self.lower_multiplier,
                upper: self.upper_multiplier,
            });
        }
        Ok(())
    }
}

/// Momentum burst configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumParams {
    /// Symmetric decision threshold on the momentum score
    pub threshold: f64,
}

impl Default for MomentumParams {
    fn default() -> Self {
        Self { threshold: 5.0 }
    }
}

impl MomentumParams {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.threshold >= 0.0) || !self.threshold.is_finite() {
            return Err(ParamsError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

/// Parameter validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("Invalid window size: {0} (must be > 0)")]
    InvalidWindow(usize),
    #[error("Invalid price band: lower {lower}, upper {upper} (must be 0 < lower <= upper)")]
    InvalidBand { lower: f64, upper: f64 },
    #[error("Invalid momentum threshold: {0} (must be finite and >= 0)")]
    InvalidThreshold(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let ma = MovingAverageParams::default();
        assert_eq!(ma.window_size, 10);
        assert_eq!(ma.upper_multiplier, 1.005);
        assert_eq!(ma.lower_multiplier, 0.995);
        assert!(ma.validate().is_ok());

        let momentum = MomentumParams::default();
        assert_eq!(momentum.threshold, 5.0);
        assert!(momentum.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let ma = MovingAverageParams::default().with_window(20).with_band(0.99, 1.01);
        assert_eq!(ma.window_size, 20);
        assert_eq!(ma.lower_multiplier, 0.99);
        assert_eq!(ma.upper_multiplier, 1.01);
    }

    #[test]
    fn test_invalid_window() {
        let ma = MovingAverageParams::default().with_window(0);
        assert_eq!(ma.validate(), Err(ParamsError::InvalidWindow(0)));
    }

    #[test]
    fn test_inverted_band() {
        let ma = MovingAverageParams::default().with_band(1.01, 0.99);
        assert!(matches!(ma.validate(), Err(ParamsError::InvalidBand { .. })));
    }

    #[test]
    fn test_invalid_threshold() {
        assert!(MomentumParams::default().with_threshold(-1.0).validate().is_err());
        assert!(MomentumParams::default().with_threshold(f64::NAN).validate().is_err());
        assert!(MomentumParams::default().with_threshold(0.0).validate().is_ok());
    }
}
