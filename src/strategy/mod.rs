//! Strategy Layer - Signal reduction and decision classification
//!
//! Reducers turn observation series into a scalar signal:
//! - `moving_average`: trailing simple moving average of one price series
//! - `zscore`: standardized deviation of the latest observation
//! - `momentum`: product of price and volume z-scores, with neutral fallback
//!
//! Classifiers map that signal to Buy / Sell / Hold:
//! - `PriceBandPolicy`: percentage band around the base price
//! - `SymmetricScorePolicy`: fixed absolute band on the momentum score

pub mod classifier;
pub mod momentum;
pub mod moving_average;
pub mod params;
pub mod zscore;

pub use classifier::{PriceBandPolicy, SymmetricScorePolicy};
pub use momentum::{momentum_score, select_most_extreme};
pub use moving_average::moving_average;
pub use params::{MomentumParams, MovingAverageParams, ParamsError};
pub use zscore::{z_score, ZScoreResult};
