//! Configuration loaded from `<REMIND_HOME>/config.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::http::DEFAULT_API_URL;

/// Environment variable overriding the configured API URL.
pub const API_URL_ENV: &str = "REMIND_API_URL";

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for remind configuration and data.
    //!
    //! REMIND_HOME resolution order:
    //! 1. REMIND_HOME environment variable (if set)
    //! 2. ~/.config/remind (default)

    use std::path::PathBuf;

    /// Returns the remind home directory.
    pub fn remind_home() -> PathBuf {
        if let Ok(home) = std::env::var("REMIND_HOME") {
            let trimmed = home.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("remind")
    }

    pub fn config_path() -> PathBuf {
        remind_home().join("config.toml")
    }

    /// Where the session token and user are persisted.
    pub fn session_path() -> PathBuf {
        remind_home().join("session.json")
    }

    pub fn logs_dir() -> PathBuf {
        remind_home().join("logs")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the reminders API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Per-request timeout in seconds; 0 disables it.
    pub request_timeout_secs: u32,
    pub log_level: String,
    /// Seconds a notification stays visible.
    pub toast_secs: u32,
}

impl Config {
    const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 30;
    const DEFAULT_LOG_LEVEL: &str = "info";
    const DEFAULT_TOAST_SECS: u32 = 4;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.toast_secs.max(1)))
    }

    /// Resolves the API base URL.
    ///
    /// Precedence: `flag` > `REMIND_API_URL` > `api_url` > default.
    pub fn api_url(&self, flag: Option<&str>) -> Result<String> {
        let env = std::env::var(API_URL_ENV).ok();
        resolve_api_url(flag, env.as_deref(), self.api_url.as_deref())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            toast_secs: Self::DEFAULT_TOAST_SECS,
        }
    }
}

fn resolve_api_url(flag: Option<&str>, env: Option<&str>, config: Option<&str>) -> Result<String> {
    for candidate in [flag, env, config].into_iter().flatten() {
        let trimmed = candidate.trim();
        if !trimmed.is_empty() {
            url::Url::parse(trimmed)
                .with_context(|| format!("Invalid API base URL: {trimmed}"))?;
            return Ok(trimmed.to_string());
        }
    }

    Ok(DEFAULT_API_URL.to_string())
}
