//! Configuration loading
//!
//! Configuration is loaded from:
//! 1. An explicit `--config` path
//! 2. Environment variable ONCALL_CONFIG_PATH
//! 3. ~/.config/oncall/config.toml
//! 4. Default values
//!
//! ONCALL_TOP_LIMIT and ONCALL_OUTPUT_FORMAT override file values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::stats::DEFAULT_TOP_LIMIT;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OncallConfig {
    /// Rows shown in the top time-consuming issues view
    #[serde(default = "default_top_limit")]
    pub default_top_limit: usize,
    /// Report format when none is given on the command line
    #[serde(default = "default_output")]
    pub default_output: String,
}

fn default_top_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

fn default_output() -> String {
    "terminal".to_string()
}

impl Default for OncallConfig {
    fn default() -> Self {
        Self {
            default_top_limit: default_top_limit(),
            default_output: default_output(),
        }
    }
}

impl OncallConfig {
    /// Load configuration from file or use defaults, then apply the environment
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(explicit, |name| std::env::var(name).ok())
    }

    /// [`OncallConfig::load`] with variables looked up through `lookup`
    ///
    /// An explicit path must exist; a path found via the environment or the
    /// platform config directory is skipped when missing.
    pub fn load_with<F>(explicit: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::find_config_path(&lookup) {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(lookup);
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply overrides looked up by variable name
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(limit) = lookup("ONCALL_TOP_LIMIT") {
            match limit.parse() {
                Ok(limit) => self.default_top_limit = limit,
                Err(_) => tracing::warn!("Ignoring invalid ONCALL_TOP_LIMIT: {}", limit),
            }
        }

        if let Some(format) = lookup("ONCALL_OUTPUT_FORMAT") {
            self.default_output = format;
        }
    }

    /// Find the configuration file path
    fn find_config_path<F>(lookup: &F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("ONCALL_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        dirs::config_dir().map(|dir| dir.join("oncall").join("config.toml"))
    }
}
