use answer_judge_core::model::kimi::KimiConfig;
use answer_judge_core::model::minimax::MinimaxConfig;
use secrecy::SecretString;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::cli::ServeArgs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(String, #[source] std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    Parse(String, #[source] serde_yaml::Error),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Convex deployment url, e.g. `https://happy-otter-123.convex.cloud`.
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub timeout_secs: u64,
    pub kimi: KimiConfig,
    pub minimax: MinimaxConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            kimi: KimiConfig::default(),
            minimax: MinimaxConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub store: StoreConfig,
    pub providers: ProvidersConfig,
}

fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

impl Config {
    /// A missing file yields the defaults; a file that exists must parse.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let path = config_path.as_ref();
        let source = path.display().to_string();
        let config = match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content, &source)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %source, "Config file not found, using defaults");
                Self::default()
            }
            Err(e) => return Err(ConfigError::Read(source, e)),
        };

        Ok(config.apply_env_overrides(first_env))
    }

    fn from_yaml(content: &str, source: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(source.to_string(), e))
    }

    /// Environment wins over the file. `lookup` returns the first non-empty
    /// value among the given variable names.
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&[&str]) -> Option<String>,
    {
        if let Some(url) = lookup(&["CONVEX_URL", "NEXT_PUBLIC_CONVEX_URL"]) {
            self.store.url = Some(url);
        }
        if let Some(key) = lookup(&["KIMI_API_KEY", "KIMI"]) {
            self.providers.kimi.api_key = Some(SecretString::from(key));
        }
        if let Some(key) = lookup(&["MINIMAX_API_KEY", "MINIMAX"]) {
            self.providers.minimax.api_key = Some(SecretString::from(key));
        }
        if let Some(group) = lookup(&["MINIMAX_GROUP"]) {
            self.providers.minimax.group_id = Some(group);
        }
        self
    }

    pub fn apply_cli_overrides(mut self, args: &ServeArgs) -> Self {
        if let Some(host) = &args.host {
            self.http.host = host.clone();
        }
        if let Some(port) = args.port {
            self.http.port = port;
        }
        self
    }
}
