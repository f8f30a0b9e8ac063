//! Configuration management for the Songkhla guide
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::GuideError;
use crate::handoff::Platform;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable prefix, e.g. `SONGKHLA_GUIDE__STORE__BASE_URL`
pub const ENV_PREFIX: &str = "SONGKHLA_GUIDE";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Remote store (PostgREST) settings
    pub store: StoreConfig,
    /// How hand-off links are built
    pub display: DisplayConfig,
    /// Fixed delays of the splash screen and weather badge
    pub timing: TimingConfig,
    /// HTTP API settings
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Remote store configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Project URL; collections are read from `{base_url}/rest/v1/{collection}`
    pub base_url: String,
    /// Anonymous API key, sent as `apikey` and bearer token
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Target platform for map deep links
    pub platform: Platform,
}

/// Fixed delays in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub splash_delay_ms: u64,
    pub weather_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
    /// OTLP/HTTP endpoint for span export; export is off when unset
    pub otlp_endpoint: Option<String>,
}

// Default value functions
fn default_store_base_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_store_timeout() -> u32 {
    30
}

fn default_splash_delay() -> u64 {
    4000
}

fn default_weather_delay() -> u64 {
    1500
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_store_base_url(),
            api_key: None,
            timeout_seconds: default_store_timeout(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: default_splash_delay(),
            weather_delay_ms: default_weather_delay(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            otlp_endpoint: None,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    #[must_use]
    pub fn weather_delay(&self) -> Duration {
        Duration::from_millis(self.weather_delay_ms)
    }
}

impl GuideConfig {
    /// Load configuration from `config_path`, or the user config file when `None`,
    /// then apply environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: GuideConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("songkhla-guide").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.store.base_url.is_empty() {
            self.store.base_url = default_store_base_url();
        }
        if self.store.timeout_seconds == 0 {
            self.store.timeout_seconds = default_store_timeout();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self
            .store
            .api_key
            .as_deref()
            .is_some_and(|key| key.trim().is_empty())
        {
            self.store.api_key = None;
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.store.timeout_seconds > 300 {
            return Err(GuideError::config("Store timeout cannot exceed 300 seconds").into());
        }

        if self.timing.splash_delay_ms > 60_000 {
            return Err(GuideError::config("Splash delay cannot exceed 60000 ms").into());
        }

        if self.timing.weather_delay_ms > 60_000 {
            return Err(GuideError::config("Weather delay cannot exceed 60000 ms").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(GuideError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(GuideError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !is_http_url(&self.store.base_url) {
            return Err(
                GuideError::config("Store base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        if let Some(endpoint) = &self.logging.otlp_endpoint {
            if !is_http_url(endpoint) {
                return Err(
                    GuideError::config("OTLP endpoint must be a valid HTTP or HTTPS URL").into(),
                );
            }
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
