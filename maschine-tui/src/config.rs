use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaschineConfig {
    /// Base URL of the maschine-api server, e.g. "http://localhost:8080"
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Delay between the last keystroke and the search request. 0 disables.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Page opened when a profile is activated; `{fid}` is substituted.
    #[serde(default = "default_profile_url")]
    pub profile_url: String,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_debounce_ms() -> u64 {
    150
}

fn default_profile_url() -> String {
    "https://warpcast.com/~/profiles/{fid}".to_string()
}

impl Default for MaschineConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            debounce_ms: default_debounce_ms(),
            profile_url: default_profile_url(),
        }
    }
}

impl MaschineConfig {
    fn app_dir(base: Option<PathBuf>) -> Result<PathBuf> {
        Ok(base
            .context("Cannot determine config directory")?
            .join("maschine-tui"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir(dirs::config_dir())?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::app_dir(dirs::cache_dir())?.join("maschine-tui.log"))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}
