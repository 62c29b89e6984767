use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Configuration for postboard, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Base url of the REST API serving `/posts` and `/comments`
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: None,
        }
    }
}

impl BoardConfig {
    pub const KEYS: [&'static str; 2] = ["api-url", "timeout"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BoardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-url" => Some(self.api_url.clone()),
            "timeout" => Some(
                self.timeout_secs
                    .map(|secs| secs.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            _ => None,
        }
    }

    /// Set a key from its textual form. `timeout` accepts seconds or `none`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "api-url" => {
                if value.is_empty() {
                    return Err(BoardError::Config("api-url cannot be empty".into()));
                }
                self.api_url = value.trim_end_matches('/').to_string();
            }
            "timeout" => {
                self.timeout_secs = match value {
                    "none" | "0" | "" => None,
                    secs => Some(secs.parse().map_err(|_| {
                        BoardError::Config(format!("Invalid timeout '{}': expected seconds", secs))
                    })?),
                };
            }
            other => {
                return Err(BoardError::Config(format!(
                    "Unknown config key: {} (known keys: {})",
                    other,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
