//! Configuration loader for engagespot
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for a specific configuration file
const CONFIG_FILE_ENV: &str = "ENGAGESPOT_CONFIG_FILE";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ENGAGESPOT";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. Built-in defaults
/// 2. A TOML file (`--config` or `ENGAGESPOT_CONFIG_FILE`), if given
/// 3. `ENGAGESPOT__*` environment variables (highest priority)
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader, picking up `ENGAGESPOT_CONFIG_FILE` if it is set
    pub fn new() -> Self {
        Self {
            config_file: std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from),
        }
    }

    /// Use an explicit configuration file, overriding `ENGAGESPOT_CONFIG_FILE`
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Get the configuration file path, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the configuration file was given but does not exist
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(ref config_file) = self.config_file {
            builder = Self::add_file_source(builder, config_file)?;
        }

        // ENGAGESPOT__HTTP__TIMEOUT_SECONDS -> http.timeout_seconds
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    fn add_file_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(true)))
    }

    /// Add environment variable source to the config builder
    ///
    /// Examples:
    /// - `ENGAGESPOT__ENGAGESPOT__API_KEY` -> `engagespot.api_key`
    /// - `ENGAGESPOT__LOGGER__LEVEL` -> `logger.level`
    fn add_env_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Global mutex to ensure tests run sequentially to avoid env var conflicts
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to create a temporary config file
    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("engagespot.toml");
        fs::write(&path, content).expect("Failed to write config file");
        (temp_dir, path)
    }

    /// Helper to safely set environment variables for a test
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in &self.vars_to_restore {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_loader_reads_config_file_env() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.set(CONFIG_FILE_ENV, "/path/to/engagespot.toml");

        let loader = ConfigLoader::new();
        assert_eq!(
            loader.config_file(),
            Some(Path::new("/path/to/engagespot.toml"))
        );
    }

    #[test]
    fn test_load_defaults_without_file() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.remove(CONFIG_FILE_ENV);
        env.remove("ENGAGESPOT__ENGAGESPOT__API_KEY");

        let settings = ConfigLoader::new().load().expect("defaults should load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let (_dir, path) = write_config(
            r#"
            [engagespot]
            api_key = "file-key"
            api_secret = "file-secret"
            enable_hmac = true

            [http]
            timeout_seconds = 15

            [logger]
            level = "debug"
            format = "json"
            "#,
        );

        let settings = ConfigLoader::default().with_file(&path).load().unwrap();
        assert_eq!(settings.engagespot.api_key, "file-key");
        assert_eq!(settings.engagespot.api_secret, "file-secret");
        assert!(settings.engagespot.enable_hmac);
        assert_eq!(settings.http.timeout_seconds, 15);
        assert_eq!(settings.http.connect_timeout_seconds, 10);
        assert_eq!(settings.logger.format, "json");
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let (_dir, path) = write_config(
            r#"
            [engagespot]
            api_key = "file-key"
            api_secret = "file-secret"
            "#,
        );
        env.set("ENGAGESPOT__ENGAGESPOT__API_KEY", "env-key");

        let settings = ConfigLoader::default().with_file(&path).load().unwrap();
        assert_eq!(settings.engagespot.api_key, "env-key");
        assert_eq!(settings.engagespot.api_secret, "file-secret");
    }

    #[test]
    fn test_missing_file_is_error() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let result = ConfigLoader::default()
            .with_file("/definitely/not/here/engagespot.toml")
            .load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let (_dir, path) = write_config(
            r#"
            [http]
            timeout_seconds = 0
            "#,
        );

        let result = ConfigLoader::default().with_file(&path).load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
