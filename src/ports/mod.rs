//! Ports Layer - Trait definitions for external dependencies
//!
//! Following hexagonal architecture, these traits abstract:
//! - Market data sources (synthetic generator, mocks)
//! - Decision policies (price band, symmetric score)

pub mod market_data;
pub mod strategy;

pub use market_data::{MarketDataError, MarketDataPort, SeriesRequest};
pub use strategy::DecisionPolicy;

#[cfg(test)]
pub use market_data::MockMarketDataPort;
