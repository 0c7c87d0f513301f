// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Tool configuration module
//!
//! This module provides the configuration structures of the ranking tool and
//! the hierarchical loading logic that sources the Blockspan credential from a
//! file or the environment.

use std::path::Path;

use anyhow::{Result, ensure};
use config::{Config, ConfigError, Environment as ConfigEnv, File, Map};
use external_apis::{BlockspanConfig, DEFAULT_BLOCKSPAN_BASE_URL, NonEmptyString};
use serde::{Deserialize, Deserializer, Serialize, de};
use shared_types::Blockchain;
use url::Url;

use crate::error::{ToolError, ToolResult};

/// Base name of the optional configuration file in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ranking-tool";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "RANKING";

/// A validated timeout duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeoutSeconds(u64);

impl TimeoutSeconds {
    /// Create a new `TimeoutSeconds`, ensuring the value is within valid bounds
    ///
    /// # Errors
    ///
    /// Returns an error if timeout is 0 or greater than 300 seconds
    pub fn new(seconds: u64) -> Result<Self> {
        ensure!(seconds != 0, "timeout must be greater than 0");
        ensure!(seconds <= 300, "timeout cannot exceed 300");
        Ok(Self(seconds))
    }

    /// Get the timeout value in seconds
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeoutSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Self::new(seconds).map_err(|e| de::Error::custom(e.to_string()))
    }
}

/// Blockspan connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockspanSettings {
    /// API host
    pub base_url: Url,
    /// Credential sent as `X-API-KEY`
    pub api_key: NonEmptyString,
    /// Request timeout; unset leaves the transport default
    #[serde(default)]
    pub timeout_seconds: Option<TimeoutSeconds>,
}

/// Ranking tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Blockspan connection settings
    pub blockspan: BlockspanSettings,
    /// Chain used when none is given on the command line
    #[serde(default)]
    pub default_chain: Blockchain,
}

impl ToolConfig {
    /// Load configuration from the default sources
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Config` if configuration is invalid or cannot be loaded.
    pub fn from_env(config_file: Option<&Path>) -> ToolResult<Self> {
        Self::load(config_file, None).map_err(|e| ToolError::Config {
            message: format!("failed to load configuration: {e}"),
        })
    }

    /// Load configuration using the config crate with hierarchical sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier ones):
    /// 1. Default values
    /// 2. `config_file` when given (required), otherwise an optional `ranking-tool.*` file
    /// 3. Environment variables with the `RANKING_` prefix, `__` separating nested keys
    ///
    /// `env` replaces the process environment when given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or is invalid.
    pub fn load(
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .set_default("blockspan.base_url", DEFAULT_BLOCKSPAN_BASE_URL)?
            .set_default("default_chain", Blockchain::default().as_str())?
            .add_source(file)
            .add_source(
                ConfigEnv::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Client configuration for the Blockspan integration
    pub fn blockspan_config(&self) -> BlockspanConfig {
        let settings = &self.blockspan;
        let config = BlockspanConfig::new(settings.api_key.clone())
            .with_base_url(settings.base_url.as_str());

        match settings.timeout_seconds {
            Some(timeout) => config.with_timeout_seconds(timeout.value()),
            None => config,
        }
    }
}
