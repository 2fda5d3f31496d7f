//! The optional `config.yaml` file.
//!
//! Every field is optional; a missing file yields [`Config::default`].
//! Command-line flags take precedence over anything set here.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name, resolved by [`crate::Palette::by_name`]
    pub theme: String,
    /// Highlight piped input without content detection
    pub force: bool,
    /// Set to `false` to pass everything through unmodified
    pub highlight: bool,
    /// Log level for the debug log file (off, error, warn, info, debug, trace)
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            force: false,
            highlight: true,
            log_level: None,
        }
    }
}

impl Config {
    /// Load from [`Config::default_path`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config file at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        log::info!("Loading config from {:?}", path);

        // An empty file deserializes to null rather than an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml_ng::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Directory holding `config.yaml`.
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("jink")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // XDG convention on all platforms: ~/.config/jink
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("jink")
            } else {
                PathBuf::from(".")
            }
        }
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }
}
