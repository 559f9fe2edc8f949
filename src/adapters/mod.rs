//! Adapters Layer - Port implementations and outer surfaces
//!
//! - Synthetic: in-process simulated market data source
//! - CLI: command-line interface and report rendering

pub mod cli;
pub mod synthetic;

pub use cli::CliApp;
pub use synthetic::SyntheticMarketData;
