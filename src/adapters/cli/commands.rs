//! CLI Command Handlers
//!
//! Each subcommand runs one pipeline once and prints its report. Without a
//! subcommand the moving average demo runs with its defaults.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use super::report;
use crate::adapters::synthetic::SyntheticMarketData;
use crate::application::{FetchOrchestrator, MomentumPipeline, MovingAveragePipeline, PipelineError};
use crate::config::{load_config, Config};

/// BRAND - Parallel signal pipeline demos
#[derive(Parser, Debug)]
#[command(
    name = "brand-signals",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Parallel synthetic market data -> signal -> Buy/Sell/Hold",
    long_about = "Simulates low-latency parallel data fetching, reduces the data to a \
                  scalar signal and maps it to a trading decision using fixed thresholds."
)]
pub struct CliApp {
    /// The command to execute (defaults to moving-average)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Moving average over one ticker fetched in parallel segments
    MovingAverage(MovingAverageCmd),

    /// Momentum burst across several exchanges fetched in parallel
    Momentum(MomentumCmd),
}

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Default)]
pub struct MovingAverageCmd {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fixed RNG seed for reproducible data
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct MomentumCmd {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fixed RNG seed for reproducible data
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Load the config file if given, otherwise the built-in defaults
pub fn resolve_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(Config::default()),
    }
}

pub async fn execute(app: CliApp, config: Config) -> Result<()> {
    match app.command {
        Some(Command::MovingAverage(cmd)) => run_moving_average(cmd, config).await,
        Some(Command::Momentum(cmd)) => run_momentum(cmd, config).await,
        None => run_moving_average(MovingAverageCmd::default(), config).await,
    }
}

async fn run_moving_average(cmd: MovingAverageCmd, config: Config) -> Result<()> {
    let seed = cmd.seed.or_else(|| config.simulation.get_seed());
    let port = SyntheticMarketData::new(config.simulation.profile()).with_seed(seed);
    let orchestrator = FetchOrchestrator::new(Arc::new(port));
    let pipeline = MovingAveragePipeline::new(orchestrator, config.moving_average)
        .context("Failed to build moving average pipeline")?;
    let ticker = pipeline.config().ticker.clone();

    if cmd.format == OutputFormat::Json {
        let output = match pipeline.run().await {
            Ok(report) => serde_json::to_value(&report)?,
            Err(e @ PipelineError::Signal(_)) => serde_json::json!({
                "ticker": ticker,
                "error": e.to_string(),
            }),
            Err(e) => return Err(e).context("Moving average pipeline failed"),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", report::moving_average_header(&ticker));
    let data = pipeline.fetch().await.context("Failed to fetch stock data")?;
    print!("{}", report::moving_average_data(&data));

    match pipeline.evaluate(&data) {
        Ok(signal) => println!("{}", report::moving_average_signal(&signal)),
        Err(e) => {
            // Diagnostic only: the run ends without a decision
            println!("{}", report::signal_error(&PipelineError::Signal(e)));
        }
    }
    Ok(())
}

async fn run_momentum(cmd: MomentumCmd, config: Config) -> Result<()> {
    let seed = cmd.seed.or_else(|| config.simulation.get_seed());
    let burst = config.simulation.burst(config.momentum.burst_exchange.clone());
    let port = SyntheticMarketData::new(config.simulation.profile())
        .with_burst(burst)
        .with_seed(seed);
    let orchestrator = FetchOrchestrator::new(Arc::new(port));
    let pipeline = MomentumPipeline::new(orchestrator, config.momentum)
        .context("Failed to build momentum pipeline")?;

    match pipeline.run().await {
        Ok(report) => match cmd.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => println!("{}", report::momentum_report(&report)),
        },
        Err(e @ PipelineError::NoSources) => match cmd.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "error": e.to_string() }))?
            ),
            OutputFormat::Text => println!("{}", report::signal_error(&e)),
        },
        Err(e) => return Err(e).context("Momentum pipeline failed"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moving_average_defaults() {
        let app = CliApp::try_parse_from(["brand-signals", "moving-average"]).unwrap();
        assert!(app.config.is_none());
        assert!(!app.verbose);
        match app.command {
            Some(Command::MovingAverage(cmd)) => {
                assert_eq!(cmd.format, OutputFormat::Text);
                assert!(cmd.seed.is_none());
            }
            _ => panic!("expected moving-average"),
        }
    }

    #[test]
    fn test_parse_momentum_with_options() {
        let app = CliApp::try_parse_from([
            "brand-signals",
            "--debug",
            "momentum",
            "--format",
            "json",
            "--seed",
            "7",
            "--config",
            "brand.toml",
        ])
        .unwrap();
        assert!(app.debug);
        assert_eq!(app.config, Some(PathBuf::from("brand.toml")));
        match app.command {
            Some(Command::Momentum(cmd)) => {
                assert_eq!(cmd.format, OutputFormat::Json);
                assert_eq!(cmd.seed, Some(7));
            }
            _ => panic!("expected momentum"),
        }
    }

    #[test]
    fn test_no_subcommand_parses() {
        let app = CliApp::try_parse_from(["brand-signals"]).unwrap();
        assert!(app.command.is_none());
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = resolve_config(None).unwrap();
        assert_eq!(config.moving_average.ticker, "AAPL");
    }

    #[tokio::test]
    async fn test_execute_both_pipelines() {
        for args in [
            vec!["brand-signals"],
            vec!["brand-signals", "moving-average", "--seed", "1"],
            vec!["brand-signals", "momentum", "--seed", "1", "--format", "json"],
        ] {
            let app = CliApp::try_parse_from(args).unwrap();
            assert!(execute(app, Config::default()).await.is_ok());
        }
    }
}
