//! Configuration management for Mathkb.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `mathkb.toml` file
//! 3. User config `~/.config/mathkb/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Location of the graph index and guidance data files.
    pub data: DataConfig,

    /// Query depth and sizing limits.
    pub query: QueryConfig,
}

/// Data file locations.
///
/// When a path is `None`, the built-in candidate locations are searched
/// relative to the current directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the knowledge graph index JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_index: Option<PathBuf>,

    /// Path to the algorithm guidance YAML table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<PathBuf>,
}

/// Query limits applied when a caller does not supply its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Maximum number of hops explored by path finding.
    pub max_path_depth: usize,

    /// Maximum recursion depth for prerequisite trees.
    pub prerequisite_depth: usize,

    /// Number of characters of a definition included in search results.
    pub definition_preview: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_path_depth: DEFAULT_MAX_PATH_DEPTH,
            prerequisite_depth: DEFAULT_PREREQUISITE_DEPTH,
            definition_preview: DEFAULT_DEFINITION_PREVIEW,
        }
    }
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./mathkb.toml` (project local)
    /// 2. `~/.config/mathkb/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        // Try project-local config first
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::from_file(DEFAULT_CONFIG_FILE);
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(DEFAULT_CONFIG_DIR).join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Use defaults
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("MATHKB_GRAPH_INDEX") {
            self.data.graph_index = Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("MATHKB_GUIDANCE") {
            self.data.guidance = Some(PathBuf::from(path));
        }
        if let Ok(depth) = std::env::var("MATHKB_MAX_PATH_DEPTH") {
            if let Ok(n) = depth.parse() {
                self.query.max_path_depth = n;
            }
        }
        if let Ok(depth) = std::env::var("MATHKB_PREREQUISITE_DEPTH") {
            if let Ok(n) = depth.parse() {
                self.query.prerequisite_depth = n;
            }
        }
    }
}

impl DataConfig {
    /// Resolve the graph index path: the configured path if set, otherwise the
    /// first existing candidate location.
    pub fn graph_index_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.graph_index {
            return Some(path.clone());
        }
        DEFAULT_GRAPH_INDEX_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    }

    /// Resolve the guidance table path: the configured path if set, otherwise
    /// the first existing candidate location.
    pub fn guidance_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.guidance {
            return Some(path.clone());
        }
        DEFAULT_GUIDANCE_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    }
}
