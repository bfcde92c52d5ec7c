//! Application configuration management.
//!
//! The backend base address is resolved in this order:
//! 1. the `LISTOCHKI_API_URL` environment variable,
//! 2. the `origin` saved in `~/.config/listochki/config.json`,
//! 3. the default origin `http://127.0.0.1:8000`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Application name used for config directory paths
const APP_NAME: &str = "listochki";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment override for the backend base address
pub const API_URL_ENV: &str = "LISTOCHKI_API_URL";

/// Origin used when nothing else is configured
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

/// Persisted settings.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    pub origin: Option<String>,
}

impl ConfigFile {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Environment,
    ConfigFile,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub source: BaseUrlSource,
}

impl Config {
    pub fn load() -> Result<Self> {
        let file = ConfigFile::load()?;
        Ok(Self::resolve(std::env::var(API_URL_ENV).ok(), file.origin))
    }

    /// Pick the base address. Empty values count as unset.
    pub fn resolve(env_override: Option<String>, origin: Option<String>) -> Self {
        let non_empty = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        if let Some(url) = non_empty(env_override) {
            return Self {
                base_url: url,
                source: BaseUrlSource::Environment,
            };
        }
        if let Some(url) = non_empty(origin) {
            return Self {
                base_url: url,
                source: BaseUrlSource::ConfigFile,
            };
        }
        Self {
            base_url: DEFAULT_ORIGIN.to_string(),
            source: BaseUrlSource::Default,
        }
    }
}
