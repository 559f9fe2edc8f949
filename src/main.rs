//! BRAND - Parallel Signal Pipeline Demos
//!
//! Runs one pipeline once and prints its report to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use brand_signals::adapters::cli::{self, resolve_config};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env (BRAND_SEED, RUST_LOG)
    dotenvy::dotenv().ok();

    let app = cli::init();
    let config = resolve_config(app.config.as_ref())?;
    init_logging(app.verbose, app.debug, &config.logging.level)?;

    cli::execute(app, config).await
}

fn init_logging(verbose: bool, debug: bool, level: &str) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .with_context(|| format!("Invalid log level: {}", level))?
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
