//! Configuration system for Packwise.
//!
//! Load engine configuration from TOML or YAML files to bound the
//! allocator's search and control catalog behaviour without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use packwise_config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     [allocator]
//!     max_dp_cells = 1000000
//!
//!     [catalog]
//!     enforce_unique_sizes = true
//!     max_pack_sizes = 64
//! "#).unwrap();
//!
//! assert_eq!(config.allocator.max_dp_cells, 1_000_000);
//! assert!(config.catalog.enforce_unique_sizes);
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use packwise_config::EngineConfig;
//!
//! let config = EngineConfig::load("packwise.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Allocator search bounds.
    #[serde(default)]
    pub allocator: AllocatorConfig,

    /// Catalog behaviour.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the allocator's dynamic-program cell limit.
    pub fn with_max_dp_cells(mut self, cells: u64) -> Self {
        self.allocator.max_dp_cells = cells;
        self
    }

    /// Enables or disables catalog size uniqueness.
    pub fn with_unique_sizes(mut self, enforce: bool) -> Self {
        self.catalog.enforce_unique_sizes = enforce;
        self
    }

    /// Caps how many pack sizes the catalog may hold.
    pub fn with_max_pack_sizes(mut self, limit: u64) -> Self {
        self.catalog.max_pack_sizes = Some(limit);
        self
    }

    /// Checks the configuration for unusable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when any limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allocator.max_dp_cells == 0 {
            return Err(ConfigError::Invalid(
                "allocator.max_dp_cells must be positive".to_string(),
            ));
        }
        if self.catalog.max_pack_sizes == Some(0) {
            return Err(ConfigError::Invalid(
                "catalog.max_pack_sizes must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Bounds for the allocation dynamic program.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AllocatorConfig {
    /// Maximum number of attainable-total cells the allocator may
    /// materialize for one call. Calls needing more fail rather than
    /// growing without bound.
    #[serde(default = "default_max_dp_cells")]
    pub max_dp_cells: u64,
}

impl AllocatorConfig {
    /// Default cell limit (16 Mi cells, roughly 200 MiB of DP state).
    pub const DEFAULT_MAX_DP_CELLS: u64 = 16_777_216;
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            max_dp_cells: Self::DEFAULT_MAX_DP_CELLS,
        }
    }
}

fn default_max_dp_cells() -> u64 {
    AllocatorConfig::DEFAULT_MAX_DP_CELLS
}

/// Catalog behaviour switches.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogConfig {
    /// Reject `add`/`update` that would duplicate an existing size value.
    /// Off by default: the allocator merges duplicate denominations.
    #[serde(default)]
    pub enforce_unique_sizes: bool,

    /// Maximum number of catalog entries, `None` for unlimited.
    #[serde(default)]
    pub max_pack_sizes: Option<u64>,
}
