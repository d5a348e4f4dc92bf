use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetchers::DEFAULT_USER_AGENT;

/// Application settings
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Path of the JSON file enchants are stored in
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Page fetch timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User-Agent header sent when fetching pages
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("enchants.json")
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with ENCHANTS__ prefix
/// 2. enchants.toml file in current directory
/// 3. Default values
///
/// Environment variable format: ENCHANTS__STORE_PATH
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("enchants").required(false))
        .add_source(
            Environment::with_prefix("ENCHANTS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
