//! Configuration settings structures for engagespot
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{LogFormat, LoggerConfig};

/// Fixed Engagespot REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.engagespot.co/v3/";

// ============================================================================
// Default value functions
// ============================================================================

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_pool_idle_timeout() -> u64 {
    90
}

fn default_user_agent() -> String {
    format!("engagespot-rs/{}", crate::pkg_version())
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Engagespot Credentials
// ============================================================================

/// API credentials and per-client switches
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagespotSettings {
    /// API key sent as `X-ENGAGESPOT-API-KEY`
    #[serde(default)]
    pub api_key: String,

    /// API secret sent as `X-ENGAGESPOT-API-SECRET` and used as the HMAC key
    #[serde(default)]
    pub api_secret: String,

    /// Attach a user signature to `sdk/connect` calls
    #[serde(default)]
    pub enable_hmac: bool,

    /// REST endpoint all paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for EngagespotSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            enable_hmac: false,
            base_url: default_base_url(),
        }
    }
}

impl std::fmt::Debug for EngagespotSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngagespotSettings")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("enable_hmac", &self.enable_hmac)
            .field("base_url", &self.base_url)
            .finish()
    }
}

// ============================================================================
// HTTP Configuration
// ============================================================================

/// Outbound HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// How long idle pooled connections are kept, in seconds
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout_seconds: u64,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            pool_idle_timeout_seconds: default_pool_idle_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::validation("logger.format".to_string(), e.to_string()))?;

        LoggerConfig::new(self.level, format, self.colored)
            .map_err(|e| ConfigError::validation("logger".to_string(), e.to_string()))
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub engagespot: EngagespotSettings,

    #[serde(default)]
    pub http: HttpSettings,

    #[serde(default)]
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.engagespot.base_url, DEFAULT_BASE_URL);
        assert!(!settings.engagespot.enable_hmac);
        assert_eq!(settings.http.timeout_seconds, 30);
        assert_eq!(settings.http.connect_timeout_seconds, 10);
        assert!(settings.http.user_agent.starts_with("engagespot-rs/"));
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let settings: Settings = toml_from_str(
            r#"
            [engagespot]
            api_key = "key"
            api_secret = "secret"
            enable_hmac = true
            "#,
        );
        assert_eq!(settings.engagespot.api_key, "key");
        assert!(settings.engagespot.enable_hmac);
        assert_eq!(settings.engagespot.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.http, HttpSettings::default());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = EngagespotSettings {
            api_secret: "super-secret".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_logger_settings_conversion() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            format: "json".to_string(),
            colored: false,
        };
        let config = settings.into_logger_config().unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn test_logger_settings_bad_format() {
        let settings = LoggerSettings {
            format: "yaml".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.into_logger_config(),
            Err(ConfigError::ValidationError { field, .. }) if field == "logger.format"
        ));
    }

    fn toml_from_str(source: &str) -> Settings {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
