//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.usermgr.toml` in the working directory
//! 4. `~/.config/usermgr/config.toml` (global defaults)
//! 5. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;
use tracing::warn;

use crate::api::{ApiClient, ApiError};
use crate::env::Env;
use crate::messages::Locale;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// How results and lists are printed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Html,
    Json,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. Unset means wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::constants::DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub locale: Locale,
    pub format: OutputFormat,
}

/// One config file as written: only the keys it actually sets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PartialConfig {
    api: PartialApiConfig,
    ui: PartialUiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PartialApiConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PartialUiConfig {
    locale: Option<Locale>,
    format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `.usermgr.toml` under `local_dir`,
    /// then applies environment variable overrides.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = local_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load the keys set in a specific file.
    fn load_file(path: &Path) -> Result<PartialConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this config. Every key the file sets wins.
    fn merge(&mut self, other: PartialConfig) {
        if let Some(base_url) = other.api.base_url {
            self.api.base_url = base_url;
        }
        if let Some(secs) = other.api.timeout_secs {
            self.api.timeout_secs = Some(secs);
        }
        if let Some(locale) = other.ui.locale {
            self.ui.locale = locale;
        }
        if let Some(format) = other.ui.format {
            self.ui.format = format;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(crate::constants::ENV_BASE_URL) {
            self.api.base_url = val;
        }
        if let Some(val) = env.get(crate::constants::ENV_LOCALE) {
            match val.parse::<Locale>() {
                Ok(locale) => self.ui.locale = locale,
                Err(_) => warn!("ignoring invalid {} value: {val}", crate::constants::ENV_LOCALE),
            }
        }
        if let Some(val) = env.get(crate::constants::ENV_TIMEOUT_SECS) {
            match val.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = Some(secs),
                _ => warn!(
                    "ignoring invalid {} value: {val}",
                    crate::constants::ENV_TIMEOUT_SECS
                ),
            }
        }
    }

    /// Build the API client this config describes. A zero timeout
    /// means no timeout.
    pub fn api_client(&self) -> Result<ApiClient, ApiError> {
        match self.api.timeout_secs {
            Some(secs) if secs > 0 => {
                ApiClient::with_timeout(&self.api.base_url, Duration::from_secs(secs))
            }
            _ => Ok(ApiClient::new(&self.api.base_url)),
        }
    }
}
