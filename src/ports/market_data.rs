use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{MarketSeries, SourceId};

/// Market data error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Fetch task failed: {0}")]
    TaskFailed(String),
}

/// What to fetch for each source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesRequest {
    /// Number of observations per source
    pub points: usize,
    /// Reference price the observations fluctuate around
    pub base_price: f64,
    /// Reference volume; `None` fetches prices only
    pub base_volume: Option<u64>,
}

impl SeriesRequest {
    pub fn prices(points: usize, base_price: f64) -> Self {
        Self {
            points,
            base_price,
            base_volume: None,
        }
    }

    pub fn prices_and_volumes(points: usize, base_price: f64, base_volume: u64) -> Self {
        Self {
            points,
            base_price,
            base_volume: Some(base_volume),
        }
    }
}

/// Market data port trait
///
/// Implementations must be shareable across the tasks the orchestrator
/// spawns, one per source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// Fetch one series for a single source
    async fn fetch_series(
        &self,
        source: &SourceId,
        request: &SeriesRequest,
    ) -> Result<MarketSeries, MarketDataError>;
}
