use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the configured store address.
pub const API_URL_ENV: &str = "RECIPEBOX_API_URL";

/// How the cache is brought back in line with the store after a mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPolicy {
    /// List the store again.
    #[default]
    Refetch,
    /// Apply the mutation to the cache without another round-trip.
    Local,
}

impl std::fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshPolicy::Refetch => write!(f, "refetch"),
            RefreshPolicy::Local => write!(f, "local"),
        }
    }
}

impl FromStr for RefreshPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "refetch" => Ok(RefreshPolicy::Refetch),
            "local" => Ok(RefreshPolicy::Local),
            other => Err(format!(
                "Unknown refresh policy: {} (expected refetch or local)",
                other
            )),
        }
    }
}

/// Configuration for recipebox, stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Base address of the recipe store; `/recipes` is appended to it.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub refresh: RefreshPolicy,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            refresh: RefreshPolicy::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub const KEYS: [&'static str; 3] = ["api-url", "refresh", "timeout"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Applies `RECIPEBOX_API_URL` when it is set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_url = url;
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-url" => Some(self.api_url.clone()),
            "refresh" => Some(self.refresh.to_string()),
            "timeout" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "api-url" => {
                url::Url::parse(value).map_err(|e| format!("Invalid api-url {}: {}", value, e))?;
                self.api_url = value.trim_end_matches('/').to_string();
            }
            "refresh" => self.refresh = value.parse()?,
            "timeout" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("Invalid timeout: {}", value))?;
                if secs == 0 {
                    return Err("Timeout must be at least 1 second".to_string());
                }
                self.timeout_secs = secs;
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_url)
            .map_err(|e| RecipeError::Config(format!("invalid api_url {}: {}", self.api_url, e)))?;
        if self.timeout_secs == 0 {
            return Err(RecipeError::Config(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
