use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Application configuration for the client tools.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Backend API settings.
    pub api: ApiConfig,
    /// Where the session credential is persisted. A leading `~/` is
    /// expanded against the home directory.
    #[serde(default)]
    pub session_file: Option<String>,
    /// Logging configuration (optional, defaults if None).
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the backend API, e.g. `http://localhost:3000/api`.
    pub base_url: String,
    /// Per-request timeout. Transport concern; the sync core has none.
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
}

fn default_timeout_sec() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level: "trace", "debug", "info", "warn", "error", "off".
    #[serde(default = "default_level")]
    pub level: String,
    /// Per-target overrides, e.g. `synckit: debug`.
    #[serde(default)]
    pub targets: HashMap<String, String>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            targets: HashMap::new(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3000/api".to_string(),
                timeout_sec: default_timeout_sec(),
            },
            session_file: None,
            logging: Some(LoggingConfig::default()),
        }
    }
}

impl AppConfig {
    /// Layered loading: defaults → YAML file → environment variables
    /// (`FARMATHONY__API__BASE_URL=...` maps to `api.base_url`).
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(config_path.as_ref()))
            .merge(Env::prefixed("FARMATHONY__").split("__"))
            .extract()
            .with_context(|| {
                format!("loading configuration from {}", config_path.as_ref().display())
            })?;

        // Fail fast on a malformed base URL instead of at first request.
        config.base_url()?;
        Ok(config)
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.api.base_url)
            .with_context(|| format!("invalid api.base_url: {}", self.api.base_url))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_sec)
    }

    /// Resolved session file path, defaulting next to the user's home.
    pub fn session_path(&self) -> PathBuf {
        let raw = self
            .session_file
            .as_deref()
            .unwrap_or("~/.farmathony/session.json");
        expand_home(raw)
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(raw)
}
