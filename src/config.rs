//! Connection settings for a VPSA or VPSA Object Storage appliance, usually read from a TOML file
//! holding one or more named profiles:
//!
//! ```toml
//! default_profile = "lab"
//!
//! [profile.lab]
//! host = "vsa-00000001-lab-01.zadaravpsa.com"
//! key = "SECRETACCESSKEY0123456789"
//!
//! [profile.archive]
//! host = "10.2.0.15"
//! key = "ANOTHERACCESSKEY987654321"
//! port = 8080
//! https = false
//! timeout_secs = 30
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::api::client::AccessKey;

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile '{0}' not found in config file")]
    MissingProfile(String),

    #[error("no home directory available to locate the config file in")]
    NoConfigDir,

    #[error("cannot parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// How to reach and authenticate against a single appliance.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[cfg_attr(feature = "strict", serde(deny_unknown_fields))]
pub struct SessionConfig {
    pub host: String,

    key: AccessKey,

    /// When absent the scheme's standard port is used.
    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default = "default_https")]
    pub https: bool,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl SessionConfig {
    pub(crate) fn access_key(&self) -> &AccessKey {
        &self.key
    }

    pub fn masked_key(&self) -> String {
        self.key.masked()
    }

    pub fn new(host: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            key: AccessKey::new(key),
            port: None,
            https: default_https(),
            timeout_secs: None,
        }
    }
}

fn default_https() -> bool {
    true
}

#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(feature = "strict", serde(deny_unknown_fields))]
pub struct ConfigFile {
    #[serde(default)]
    pub default_profile: Option<String>,

    #[serde(default, rename = "profile")]
    pub profiles: BTreeMap<String, SessionConfig>,
}

impl ConfigFile {
    /// `<platform config dir>/zadarapy/config.toml`, for example `~/.config/zadarapy/config.toml`
    /// on Linux.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("com", "Zadara Storage", "zadarapy")
            .ok_or(ConfigError::NoConfigDir)?;

        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading config file");

        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&Self::default_path()?)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: ConfigFile = toml::from_str(contents)?;
        Ok(config)
    }

    /// Looks up a profile by name. Without an explicit name the file's `default_profile` is used,
    /// and without that the profile called `default`.
    pub fn profile(&self, name: Option<&str>) -> Result<&SessionConfig, ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE);

        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::MissingProfile(name.to_string()))?;

        tracing::debug!(profile = name, host = %profile.host, key = %profile.masked_key(), "selected profile");

        Ok(profile)
    }
}
