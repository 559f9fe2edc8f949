//! Configuration Loader
//!
//! Every field has a default matching the BRAND demos, so the pipelines
//! run without any file. A TOML file can override any subset of fields.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::adapters::synthetic::{BurstProfile, SimulationProfile, UniformRange};
use crate::strategy::params::{MomentumParams, MovingAverageParams};

/// Environment variable overriding `[simulation] seed`
pub const SEED_ENV_VAR: &str = "BRAND_SEED";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub moving_average: MovingAverageSection,
    pub momentum: MomentumSection,
    pub simulation: SimulationSection,
    pub logging: LoggingSection,
}

/// Moving average pipeline section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingAverageSection {
    /// Ticker symbol (for reporting and segment ids)
    pub ticker: String,
    /// Base price the simulated data fluctuates around
    pub base_price: f64,
    /// Total data points across all segments
    pub total_points: usize,
    /// Number of parallel fetch segments
    pub segments: usize,
    /// Trailing window for the moving average
    pub window_size: usize,
    /// Buy above base_price * upper_multiplier
    pub upper_multiplier: f64,
    /// Sell below base_price * lower_multiplier
    pub lower_multiplier: f64,
}

impl Default for MovingAverageSection {
    fn default() -> Self {
        let params = MovingAverageParams::default();
        Self {
            ticker: "AAPL".to_string(),
            base_price: 150.0,
            total_points: 100,
            segments: 4,
            window_size: params.window_size,
            upper_multiplier: params.upper_multiplier,
            lower_multiplier: params.lower_multiplier,
        }
    }
}

impl MovingAverageSection {
    pub fn params(&self) -> MovingAverageParams {
        MovingAverageParams {
            window_size: self.window_size,
            upper_multiplier: self.upper_multiplier,
            lower_multiplier: self.lower_multiplier,
        }
    }
}

/// Momentum burst pipeline section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumSection {
    /// Exchanges fetched in parallel
    pub exchanges: Vec<String>,
    /// Data points per exchange (one minute of per-second samples)
    pub num_points: usize,
    /// Base stock price
    pub base_price: f64,
    /// Base trade volume
    pub base_volume: u64,
    /// Exchange forced into a momentum burst on its last sample
    pub burst_exchange: Option<String>,
    /// Symmetric decision threshold on the momentum score
    pub threshold: f64,
}

impl Default for MomentumSection {
    fn default() -> Self {
        Self {
            exchanges: vec!["NYSE".to_string(), "NASDAQ".to_string(), "BATS".to_string()],
            num_points: 60,
            base_price: 150.0,
            base_volume: 1000,
            burst_exchange: Some("NASDAQ".to_string()),
            threshold: MomentumParams::default().threshold,
        }
    }
}

impl MomentumSection {
    pub fn params(&self) -> MomentumParams {
        MomentumParams {
            threshold: self.threshold,
        }
    }
}

/// Random data generation section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    /// Fixed RNG seed; omitted means fresh entropy each run
    pub seed: Option<u64>,
    pub price_fluctuation: UniformRange,
    pub volume_multiplier: UniformRange,
    pub burst_price_lift: UniformRange,
    pub burst_volume_multiplier: UniformRange,
}

impl Default for SimulationSection {
    fn default() -> Self {
        let profile = SimulationProfile::default();
        let burst = BurstProfile::default();
        Self {
            seed: None,
            price_fluctuation: profile.price_fluctuation,
            volume_multiplier: profile.volume_multiplier,
            burst_price_lift: burst.price_lift,
            burst_volume_multiplier: burst.volume_multiplier,
        }
    }
}

impl SimulationSection {
    pub fn profile(&self) -> SimulationProfile {
        SimulationProfile {
            price_fluctuation: self.price_fluctuation,
            volume_multiplier: self.volume_multiplier,
        }
    }

    pub fn burst(&self, source: Option<String>) -> BurstProfile {
        BurstProfile {
            source,
            price_lift: self.burst_price_lift,
            volume_multiplier: self.burst_volume_multiplier,
        }
    }

    /// Seed with environment variable override
    /// Checks BRAND_SEED first, falls back to config value
    pub fn get_seed(&self) -> Option<u64> {
        parse_seed_override(std::env::var(SEED_ENV_VAR).ok()).or(self.seed)
    }
}

/// Parse a raw seed override; malformed values are reported and ignored
fn parse_seed_override(raw: Option<String>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            tracing::warn!("Ignoring {}={:?}: {}", SEED_ENV_VAR, raw, e);
            None
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ma = &self.moving_average;
        if ma.ticker.is_empty() {
            return Err(ConfigError::ValidationError(
                "ticker cannot be empty".to_string(),
            ));
        }
        if !ma.base_price.is_finite() || ma.base_price <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "moving_average.base_price must be > 0, got {}",
                ma.base_price
            )));
        }
        if ma.segments == 0 {
            return Err(ConfigError::ValidationError(
                "segments must be > 0".to_string(),
            ));
        }
        ma.params()
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        let momentum = &self.momentum;
        if momentum.exchanges.is_empty() {
            return Err(ConfigError::ValidationError(
                "exchanges cannot be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for exchange in &momentum.exchanges {
            if exchange.is_empty() {
                return Err(ConfigError::ValidationError(
                    "exchange names cannot be empty".to_string(),
                ));
            }
            if !seen.insert(exchange.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate exchange: {}",
                    exchange
                )));
            }
        }
        if !momentum.base_price.is_finite() || momentum.base_price <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "momentum.base_price must be > 0, got {}",
                momentum.base_price
            )));
        }
        momentum
            .params()
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        let sim = &self.simulation;
        for (name, range) in [
            ("price_fluctuation", sim.price_fluctuation),
            ("volume_multiplier", sim.volume_multiplier),
            ("burst_price_lift", sim.burst_price_lift),
            ("burst_volume_multiplier", sim.burst_volume_multiplier),
        ] {
            if !range.is_valid() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must satisfy low <= high, got [{}, {}]",
                    name, range.low, range.high
                )));
            }
        }
        if sim.volume_multiplier.low < 0.0 || sim.burst_volume_multiplier.low < 0.0 {
            return Err(ConfigError::ValidationError(
                "volume multipliers cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_demos() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.moving_average.ticker, "AAPL");
        assert_eq!(config.moving_average.total_points, 100);
        assert_eq!(config.moving_average.segments, 4);
        assert_eq!(config.moving_average.window_size, 10);
        assert_eq!(config.momentum.exchanges, vec!["NYSE", "NASDAQ", "BATS"]);
        assert_eq!(config.momentum.num_points, 60);
        assert_eq!(config.momentum.base_volume, 1000);
        assert_eq!(config.momentum.burst_exchange.as_deref(), Some("NASDAQ"));
        assert_eq!(config.momentum.threshold, 5.0);
        assert_eq!(config.logging.level, "warn");
        assert!(config.simulation.seed.is_none());
    }

    #[test]
    fn test_load_partial_config() {
        let file = write_config(
            r#"
[moving_average]
ticker = "MSFT"
window_size = 20

[momentum]
exchanges = ["NYSE", "ARCA"]
burst_exchange = "ARCA"
threshold = 3.5

[simulation]
seed = 99
price_fluctuation = { low = -0.01, high = 0.01 }

[logging]
level = "debug"
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.moving_average.ticker, "MSFT");
        assert_eq!(config.moving_average.window_size, 20);
        // Unspecified fields keep their defaults
        assert_eq!(config.moving_average.base_price, 150.0);
        assert_eq!(config.moving_average.params().upper_multiplier, 1.005);
        assert_eq!(config.momentum.exchanges, vec!["NYSE", "ARCA"]);
        assert_eq!(config.momentum.params().threshold, 3.5);
        assert_eq!(config.simulation.seed, Some(99));
        assert_eq!(config.simulation.profile().price_fluctuation.high, 0.01);
        assert_eq!(config.simulation.volume_multiplier, UniformRange::new(0.8, 1.2));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.momentum.num_points, 60);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/path/brand.toml");
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[moving_average\nticker = ");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }

    #[test]
    fn test_zero_window_rejected() {
        let file = write_config("[moving_average]\nwindow_size = 0\n");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_zero_segments_rejected() {
        let mut config = Config::default();
        config.moving_average.segments = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_exchange_rejected() {
        let file = write_config("[momentum]\nexchanges = [\"NYSE\", \"NYSE\"]\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate exchange"));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let mut config = Config::default();
        config.momentum.threshold = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = Config::default();
        config.simulation.burst_price_lift = UniformRange::new(0.02, 0.01);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seed_override_parsing() {
        assert_eq!(parse_seed_override(None), None);
        assert_eq!(parse_seed_override(Some(" 42 ".to_string())), Some(42));
        assert_eq!(parse_seed_override(Some("abc".to_string())), None);
        assert_eq!(parse_seed_override(Some("-1".to_string())), None);
    }

    #[test]
    fn test_burst_profile_from_section() {
        let sim = SimulationSection::default();
        let burst = sim.burst(Some("NASDAQ".to_string()));
        assert!(burst.applies_to(&"nasdaq".into()));
        assert_eq!(burst.price_lift, UniformRange::new(0.01, 0.02));
    }
}
