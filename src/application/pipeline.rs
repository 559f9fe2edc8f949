//! Signal Pipelines
//!
//! Fetch -> reduce -> classify, once per run.
//!
//! - `MovingAveragePipeline`: one ticker in parallel segments, trailing
//!   moving average, price band decision
//! - `MomentumPipeline`: several exchanges in parallel, price x volume
//!   z-score product per exchange, most extreme exchange decides

use serde::Serialize;
use statrs::statistics::Statistics;
use thiserror::Error;

use crate::application::orchestrator::{FetchOrchestrator, OrchestratorError};
use crate::config::{MomentumSection, MovingAverageSection};
use crate::domain::{Decision, MarketSeries, MomentumScore, SignalError, SourceId};
use crate::ports::{DecisionPolicy, SeriesRequest};
use crate::strategy::{
    momentum_score, moving_average, select_most_extreme, ParamsError, PriceBandPolicy,
    SymmetricScorePolicy,
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Fetch failed: {0}")]
    Orchestrator(#[from] OrchestratorError),
    #[error("Error computing signal: {0}")]
    Signal(#[from] SignalError),
    #[error("Invalid parameters: {0}")]
    Params(#[from] ParamsError),
    #[error("No source returned data; nothing to decide on")]
    NoSources,
}

/// Moving average signal and the decision it maps to
#[derive(Debug, Clone, Serialize)]
pub struct MovingAverageSignal {
    pub window_size: usize,
    pub moving_average: f64,
    pub upper_threshold: f64,
    pub lower_threshold: f64,
    pub decision: Decision,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovingAverageReport {
    pub ticker: String,
    pub base_price: f64,
    pub data: Vec<f64>,
    pub signal: MovingAverageSignal,
}

/// Single-ticker moving average pipeline
pub struct MovingAveragePipeline {
    orchestrator: FetchOrchestrator,
    config: MovingAverageSection,
    policy: PriceBandPolicy,
}

impl MovingAveragePipeline {
    pub fn new(
        orchestrator: FetchOrchestrator,
        config: MovingAverageSection,
    ) -> Result<Self, PipelineError> {
        let params = config.params();
        params.validate()?;
        let policy = PriceBandPolicy::new(config.base_price, &params);
        Ok(Self {
            orchestrator,
            config,
            policy,
        })
    }

    pub fn config(&self) -> &MovingAverageSection {
        &self.config
    }

    /// Fetch all segments and concatenate them
    pub async fn fetch(&self) -> Result<Vec<f64>, PipelineError> {
        tracing::info!(
            "Fetching {} points for {} in {} segments",
            self.config.total_points,
            self.config.ticker,
            self.config.segments
        );
        let data = self
            .orchestrator
            .fetch_segmented(
                &self.config.ticker,
                self.config.total_points,
                self.config.segments,
                self.config.base_price,
            )
            .await?;
        Ok(data)
    }

    /// Reduce and classify already-fetched data
    pub fn evaluate(&self, data: &[f64]) -> Result<MovingAverageSignal, SignalError> {
        let window_size = self.config.window_size;
        let average = moving_average(data, window_size)?;
        let decision = self.policy.classify(average);
        tracing::info!(
            "Moving average over last {} points: {:.2} -> {}",
            window_size,
            average,
            decision
        );

        Ok(MovingAverageSignal {
            window_size,
            moving_average: average,
            upper_threshold: self.policy.upper_threshold(),
            lower_threshold: self.policy.lower_threshold(),
            decision,
            label: decision.label(self.policy.label_style()),
        })
    }

    pub async fn run(&self) -> Result<MovingAverageReport, PipelineError> {
        let data = self.fetch().await?;
        let signal = self.evaluate(&data)?;
        Ok(MovingAverageReport {
            ticker: self.config.ticker.clone(),
            base_price: self.config.base_price,
            data,
            signal,
        })
    }
}

/// Per-exchange statistics shown in the momentum report
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeReading {
    pub exchange: SourceId,
    pub latest_price: Option<f64>,
    pub mean_price: f64,
    pub price_z: f64,
    pub latest_volume: Option<u64>,
    pub mean_volume: f64,
    pub volume_z: f64,
    pub momentum: MomentumScore,
}

impl ExchangeReading {
    pub fn from_series(series: &MarketSeries) -> Self {
        let volumes = series.volumes_f64().unwrap_or_default();
        let momentum = momentum_score(series.prices(), &volumes);
        let (price_z, volume_z) = momentum.components();

        Self {
            exchange: series.source().clone(),
            latest_price: series.latest_price(),
            mean_price: series.prices().iter().mean(),
            price_z,
            latest_volume: series.latest_volume(),
            mean_volume: volumes.iter().mean(),
            volume_z,
            momentum,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedSource {
    pub exchange: SourceId,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MomentumReport {
    pub readings: Vec<ExchangeReading>,
    pub failures: Vec<FailedSource>,
    pub most_extreme: SourceId,
    pub extreme_score: f64,
    pub threshold: f64,
    pub decision: Decision,
    pub label: &'static str,
}

/// Multi-exchange momentum burst pipeline
pub struct MomentumPipeline {
    orchestrator: FetchOrchestrator,
    config: MomentumSection,
    policy: SymmetricScorePolicy,
}

impl MomentumPipeline {
    pub fn new(
        orchestrator: FetchOrchestrator,
        config: MomentumSection,
    ) -> Result<Self, PipelineError> {
        let params = config.params();
        params.validate()?;
        let policy = SymmetricScorePolicy::new(&params);
        Ok(Self {
            orchestrator,
            config,
            policy,
        })
    }

    pub fn config(&self) -> &MomentumSection {
        &self.config
    }

    pub async fn run(&self) -> Result<MomentumReport, PipelineError> {
        let sources: Vec<SourceId> = self
            .config
            .exchanges
            .iter()
            .map(|e| SourceId::new(e.as_str()))
            .collect();
        let request = SeriesRequest::prices_and_volumes(
            self.config.num_points,
            self.config.base_price,
            self.config.base_volume,
        );

        tracing::info!("Fetching intraday data from {} exchanges", sources.len());
        let outcome = self.orchestrator.fetch_all(&sources, request).await?;

        let readings: Vec<ExchangeReading> = outcome
            .series
            .iter()
            .map(ExchangeReading::from_series)
            .collect();

        let (most_extreme, extreme_score) = select_most_extreme(
            readings
                .iter()
                .map(|r| (r.exchange.clone(), r.momentum.value())),
        )
        .ok_or(PipelineError::NoSources)?;

        let decision = self.policy.classify(extreme_score);
        tracing::info!(
            "Most extreme signal from {}: {:.2} -> {}",
            most_extreme,
            extreme_score,
            decision
        );

        Ok(MomentumReport {
            readings,
            failures: outcome
                .failures
                .into_iter()
                .map(|f| FailedSource {
                    exchange: f.source,
                    error: f.error.to_string(),
                })
                .collect(),
            most_extreme,
            extreme_score,
            threshold: self.policy.threshold,
            decision,
            label: decision.label(self.policy.label_style()),
        })
    }
}
