//! Synthetic Market Data
//!
//! Simulated observations standing in for a real feed:
//! - prices fluctuate uniformly within +/-0.5% of the base price
//! - volumes fluctuate uniformly within 80%..120% of the base volume
//! - one designated source can burst on its final observation

mod generator;

pub use generator::{
    generate_series, round_price, BurstProfile, SimulationProfile, SyntheticMarketData,
    UniformRange,
};
