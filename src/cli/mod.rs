//! CLI module for engagespot
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration loading (config file + environment)
//! - Command handlers for send, connect and sign

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use executor::execute_command;
pub use parser::{Cli, Commands};

use crate::config::{ConfigLoader, Settings};
use crate::logger::init_logger;

/// Load configuration for the given CLI arguments
///
/// `--config` wins over `ENGAGESPOT_CONFIG_FILE`; environment variables
/// override values from either.
pub fn load_config(cli: &Cli) -> anyhow::Result<Settings> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    Ok(loader.load()?)
}

/// Initialize logger from settings, honoring --verbose / --quiet
pub fn init_logger_from_settings(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let mut logger_config = settings.logger.clone().into_logger_config()?;
    if let Some(level) = cli.log_level_override() {
        logger_config.with_level(level);
    }
    init_logger(&logger_config)
}
