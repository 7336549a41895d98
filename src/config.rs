//! Analytics configuration
//!
//! Loaded from YAML. Every field has a default, so a partial file (or no
//! file at all) yields a usable configuration.
//!
//! ```yaml
//! themes:
//!   limit: 50
//!   extra_stop_words: [spaceflight, microgravity]
//! graph:
//!   link_policy: drop
//! ```

use crate::adjacency::LinkPolicy;
use crate::themes::{DEFAULT_MIN_TOKEN_LEN, DEFAULT_THEME_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub themes: ThemeConfig,
    pub graph: GraphConfig,
}

/// Theme extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Maximum number of terms returned
    pub limit: usize,
    /// Tokens this long or shorter are discarded
    pub min_token_len: usize,
    /// Added to the built-in stop-word list
    pub extra_stop_words: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_THEME_LIMIT,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            extra_stop_words: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// What to do with links whose endpoints are not in the node set
    pub link_policy: LinkPolicy,
}

impl AnalyticsConfig {
    pub fn from_yaml(text: &str) -> ConfigResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// `<config dir>/bionova/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bionova").join("config.yaml"))
    }

    /// Load `path` if given, else the default location if a file exists
    /// there, else the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
