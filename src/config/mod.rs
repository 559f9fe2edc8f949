//! Configuration Module
//!
//! Defaults reproduce the BRAND demos; an optional TOML file overrides them.

pub mod loader;

pub use loader::{
    load_config, Config, ConfigError, LoggingSection, MomentumSection, MovingAverageSection,
    SimulationSection, SEED_ENV_VAR,
};
