//! Configuration loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, UtilkitError};

use super::{HashConfig, HeaderConfig, TermConfig};

const CONFIG_FILENAME: &str = ".utilkit.toml";
const USER_CONFIG_DIR: &str = "utilkit";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Terminal output overrides
    #[serde(default)]
    pub term: TermConfig,

    /// Header layout
    #[serde(default)]
    pub header: HeaderConfig,

    /// Hashing settings
    #[serde(default)]
    pub hash: HashConfig,
}

impl Config {
    /// Load configuration from `path` if given, otherwise from the first
    /// existing of `.utilkit.toml` and the user config file, otherwise
    /// return defaults
    pub fn load(path: Option<&Path>) -> Result<Self, UtilkitError> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        let candidates = [Some(PathBuf::from(CONFIG_FILENAME)), Self::user_config_path()];
        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Self::load_from_file(&candidate);
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// `<config dir>/utilkit/config.toml`, if the platform has a config dir
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILENAME))
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, UtilkitError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        tracing::debug!("Loading configuration from {}", path.display());
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, UtilkitError> {
        toml::from_str(content).map_err(|e| {
            ConfigError::Parse {
                path: path.display().to_string(),
                source: e,
            }
            .into()
        })
    }
}
