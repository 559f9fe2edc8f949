//! BRAND - Parallel Signal Pipeline Library
//!
//! Simulated low-latency parallel data fetching feeding a signal reducer and
//! a threshold classifier.
//!
//! # Modules
//!
//! - `domain`: Core types (MarketSeries, Decision, MomentumScore)
//! - `ports`: Trait abstractions (MarketDataPort, DecisionPolicy)
//! - `strategy`: Signal reduction (moving average, z-score, momentum) and classifiers
//! - `adapters`: Synthetic market data and CLI
//! - `config`: Configuration loading and validation
//! - `application`: Fetch orchestrator and pipelines

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod strategy;
