//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{EngagespotSettings, HttpSettings, LoggerSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl EngagespotSettings {
    /// Validate credentials and endpoint
    ///
    /// # Validation Rules
    /// - API key and secret must not be empty
    /// - Base URL must be an absolute http(s) URL
    ///
    /// Credentials are only checked when a client is built, so commands that
    /// never talk to the API can run with a partial configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::validation(
                "engagespot.api_key",
                "API key is required. Set it in the config file or ENGAGESPOT__ENGAGESPOT__API_KEY.",
            ));
        }

        self.validate_secret()?;
        self.validate_base_url()
    }

    /// Validate only the API secret
    pub fn validate_secret(&self) -> Result<(), ConfigError> {
        if self.api_secret.is_empty() {
            return Err(ConfigError::validation(
                "engagespot.api_secret",
                "API secret is required. Set it in the config file or ENGAGESPOT__ENGAGESPOT__API_SECRET.",
            ));
        }
        Ok(())
    }

    fn validate_base_url(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|_| {
            ConfigError::validation(
                "engagespot.base_url".to_string(),
                format!("Invalid URL format: {}", self.base_url),
            )
        })?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(ConfigError::validation(
                "engagespot.base_url",
                "URL must use http or https protocol",
            ));
        }

        Ok(())
    }
}

impl HttpSettings {
    /// Validate HTTP client configuration
    ///
    /// # Validation Rules
    /// - Request and connect timeouts must be greater than 0
    /// - Connect timeout must not exceed the request timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "http.timeout_seconds",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout_seconds",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds > self.timeout_seconds {
            return Err(ConfigError::validation(
                "http.connect_timeout_seconds",
                "Connect timeout cannot be longer than the request timeout.",
            ));
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::validation(
                "http.user_agent",
                "User agent cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::validation(
                "logger.level".to_string(),
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        let format = self.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::validation(
                "logger.format".to_string(),
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate everything that does not depend on credentials
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.http.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
