//! Configuration management module for engagespot
//!
//! This module provides layered configuration loading with support for:
//! - TOML configuration files
//! - Environment variable overrides
//!
//! # Configuration Priority (lowest to highest)
//! 1. Built-in defaults
//! 2. The file named by `--config` or `ENGAGESPOT_CONFIG_FILE`
//! 3. `ENGAGESPOT__*` environment variables

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{DEFAULT_BASE_URL, EngagespotSettings, HttpSettings, LoggerSettings, Settings};
