use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_TIMEOUT_SECS, DOC_URL};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runtime settings of the decoder.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Document fetched when no source is given
    pub url: String,
    /// Timeout of a single HTTP fetch
    pub timeout_secs: u64,
    /// Render the offline sample if fetching [Config::url] fails
    pub fallback_to_sample: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: String::from(DOC_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fallback_to_sample: true,
        }
    }
}

impl Config {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&s)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
