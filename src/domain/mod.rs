//! Domain Layer - Core types for the BRAND signal pipeline
//!
//! Pure data types with no I/O. Sources produce `MarketSeries`,
//! reducers produce scalar signals, classifiers produce a `Decision`.

pub mod decision;
pub mod series;
pub mod signal;

pub use decision::{Decision, LabelStyle};
pub use series::{MarketSeries, SourceId};
pub use signal::{MomentumScore, SignalError};
