//! CLI Adapter
//!
//! Command-line interface for the BRAND signal pipelines.
//! Uses clap derive macros for argument parsing.

mod commands;
pub mod report;

pub use commands::{
    execute, resolve_config, CliApp, Command, MomentumCmd, MovingAverageCmd, OutputFormat,
};

/// Initialize the CLI application
pub fn init() -> CliApp {
    use clap::Parser;
    CliApp::parse()
}
