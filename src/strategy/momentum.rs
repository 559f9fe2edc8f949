//! Momentum Burst Score
//!
//! Momentum Score = (Price Z-Score) x (Volume Z-Score)
//!
//! Same-direction price and volume spikes amplify each other, opposite
//! directions give a negative score. Failures on either series fall back to
//! a neutral score instead of aborting the run.

use crate::domain::{MomentumScore, SignalError};
use crate::strategy::zscore::z_score;

/// Momentum score for parallel price and volume series
pub fn momentum_score(prices: &[f64], volumes: &[f64]) -> MomentumScore {
    match try_momentum(prices, volumes) {
        Ok(score) => score,
        Err(reason) => {
            tracing::warn!("Momentum score fell back to neutral: {}", reason);
            MomentumScore::neutral(reason)
        }
    }
}

fn try_momentum(prices: &[f64], volumes: &[f64]) -> Result<MomentumScore, SignalError> {
    let price_z = z_score(prices)?.z_score;
    let volume_z = z_score(volumes)?.z_score;
    Ok(MomentumScore::scored(price_z, volume_z))
}

/// Pick the entry with the largest absolute score
///
/// Ties keep the earliest entry in iteration order. Returns `None` for an
/// empty input.
pub fn select_most_extreme<K, I>(scores: I) -> Option<(K, f64)>
where
    I: IntoIterator<Item = (K, f64)>,
{
    scores.into_iter().fold(None, |best, (key, score)| {
        let keep = matches!(&best, Some((_, b)) if b.abs() >= score.abs());
        if keep {
            best
        } else {
            Some((key, score))
        }
    })
}
