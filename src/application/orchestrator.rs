//! Parallel Fetch Orchestrator
//!
//! Fans out one fetch task per source, then joins all of them. A failing
//! source is logged and dropped; the remaining sources still come back.

use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::domain::{MarketSeries, SourceId};
use crate::ports::{MarketDataError, MarketDataPort, SeriesRequest};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrchestratorError {
    #[error("No sources to fetch")]
    EmptySources,
    #[error("Duplicate source identifier: {0}")]
    DuplicateSource(SourceId),
    #[error("Segment count must be > 0")]
    InvalidSegments,
}

/// A source that was dropped from the results
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFailure {
    pub source: SourceId,
    pub error: MarketDataError,
}

/// Joined results of one fan-out, in dispatch order
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub series: Vec<MarketSeries>,
    pub failures: Vec<SourceFailure>,
}

impl FetchOutcome {
    pub fn get(&self, source: &SourceId) -> Option<&MarketSeries> {
        self.series.iter().find(|s| s.source() == source)
    }

    pub fn sources(&self) -> impl Iterator<Item = &SourceId> {
        self.series.iter().map(|s| s.source())
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Coordinates concurrent fetches against a market data port
#[derive(Clone)]
pub struct FetchOrchestrator {
    port: Arc<dyn MarketDataPort>,
}

impl FetchOrchestrator {
    pub fn new(port: Arc<dyn MarketDataPort>) -> Self {
        Self { port }
    }

    /// Fetch every source concurrently and wait for all of them
    pub async fn fetch_all(
        &self,
        sources: &[SourceId],
        request: SeriesRequest,
    ) -> Result<FetchOutcome, OrchestratorError> {
        if sources.is_empty() {
            return Err(OrchestratorError::EmptySources);
        }
        let mut seen = HashSet::with_capacity(sources.len());
        for source in sources {
            if !seen.insert(source) {
                return Err(OrchestratorError::DuplicateSource(source.clone()));
            }
        }

        tracing::info!("Dispatching {} fetch tasks", sources.len());

        // One task per source; they all run before the first await below
        let handles: Vec<(SourceId, JoinHandle<Result<MarketSeries, MarketDataError>>)> = sources
            .iter()
            .map(|source| {
                let port = Arc::clone(&self.port);
                let task_source = source.clone();
                let handle = tokio::spawn(async move {
                    port.fetch_series(&task_source, &request).await
                });
                (source.clone(), handle)
            })
            .collect();

        let mut outcome = FetchOutcome::default();
        for (source, handle) in handles {
            let result = handle
                .await
                .map_err(|e| MarketDataError::TaskFailed(format!("Task join error: {}", e)))
                .and_then(|inner| inner);

            match result {
                Ok(series) => {
                    tracing::debug!("Fetched {} points from {}", series.len(), source);
                    outcome.series.push(series);
                }
                Err(error) => {
                    tracing::error!("Error fetching data from {}: {}", source, error);
                    outcome.failures.push(SourceFailure { source, error });
                }
            }
        }

        Ok(outcome)
    }

    /// Fetch one ticker split across `segments` parallel tasks
    ///
    /// Each segment fetches `total_points / segments` points. Surviving
    /// segments are concatenated in segment order.
    pub async fn fetch_segmented(
        &self,
        ticker: &str,
        total_points: usize,
        segments: usize,
        base_price: f64,
    ) -> Result<Vec<f64>, OrchestratorError> {
        if segments == 0 {
            return Err(OrchestratorError::InvalidSegments);
        }

        let sources: Vec<SourceId> = (0..segments)
            .map(|i| SourceId::new(format!("{}-{}", ticker, i)))
            .collect();
        let request = SeriesRequest::prices(total_points / segments, base_price);

        let outcome = self.fetch_all(&sources, request).await?;
        Ok(outcome
            .series
            .into_iter()
            .flat_map(MarketSeries::into_prices)
            .collect())
    }
}
