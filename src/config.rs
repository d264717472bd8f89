//! Configuration management for contactdash
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_ENDPOINT, DEFAULT_IMAGE_BASE_URL, ENDPOINT_ENV_VAR,
    LOCAL_CONFIG_FILE_NAME, MAX_REQUEST_TIMEOUT_SECS,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Contacts endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// URL every operation is POSTed to
    pub endpoint: String,
    /// Base URL contact images are served from
    pub image_base_url: String,
    /// Per-request timeout in seconds (0 = wait indefinitely)
    pub request_timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show a status bar notice when a request fails at the transport level
    pub surface_transport_errors: bool,
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file
    pub enabled: bool,
    /// Minimum level: error, warn, info, debug or trace
    pub level: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            request_timeout_secs: 0,
        }
    }
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            surface_transport_errors: true,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file. Validation is left to the
    /// caller so overrides can be applied first.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Apply `CONTACTDASH_ENDPOINT` if it is set and non-empty
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            if !endpoint.trim().is_empty() {
                self.backend.endpoint = endpoint.trim().to_string();
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_http_url("backend.endpoint", &self.backend.endpoint)?;
        validate_http_url("backend.image_base_url", &self.backend.image_base_url)?;

        if self.backend.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            anyhow::bail!(
                "request_timeout_secs cannot exceed {} seconds, got {}",
                MAX_REQUEST_TIMEOUT_SECS,
                self.backend.request_timeout_secs
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# contactdash configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}

fn validate_http_url(key: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL: '{}'", key, value))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("{} must use http or https, got '{}'", key, url.scheme());
    }
    Ok(())
}
