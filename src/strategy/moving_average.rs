//! Trailing Simple Moving Average
//!
//! Only the last `window` observations contribute; earlier ones are ignored.

use crate::domain::SignalError;

/// Arithmetic mean of the last `window` elements
pub fn moving_average(values: &[f64], window: usize) -> Result<f64, SignalError> {
    if window == 0 || values.len() < window {
        return Err(SignalError::InsufficientData {
            required: window.max(1),
            actual: values.len(),
        });
    }

    let tail = &values[values.len() - window..];
    Ok(tail.iter().sum::<f64>() / window as f64)
}
