use std::{fmt::Display, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::device::DEFAULT_MOUNT_POINTS;

///
/// Looked for in the working directory when no config path is given
///
pub const DEFAULT_CONFIG_FILE: &str = "kobo_utils.json";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub mount_points: Vec<PathBuf>,
    pub backup_path: PathBuf,
    pub cooldown_hours: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount_points: DEFAULT_MOUNT_POINTS.clone(),
            backup_path: PathBuf::from("backups"),
            cooldown_hours: 12,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IOError(std::io::Error),
    Parse(serde_json::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::IOError(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IOError(e) => write!(f, "could not read config: {e}"),
            ConfigError::Parse(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    ///
    /// Reads the config at `path`. Without a path, `kobo_utils.json` is used if present,
    /// falling back to the defaults.
    ///
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };

        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }
}
