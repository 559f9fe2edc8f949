pub mod orchestrator;
pub mod pipeline;

pub use orchestrator::{FetchOrchestrator, FetchOutcome, OrchestratorError, SourceFailure};
pub use pipeline::{
    ExchangeReading, FailedSource, MomentumPipeline, MomentumReport, MovingAveragePipeline,
    MovingAverageReport, MovingAverageSignal, PipelineError,
};
