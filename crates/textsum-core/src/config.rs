use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

use crate::ai::PromptLanguage;

/// Environment variables consulted after the config file is read.
pub const ENV_API_TOKEN: &str = "TEXTSUM_API_TOKEN";
pub const ENV_HF_TOKEN: &str = "HF_TOKEN";
pub const ENV_ENDPOINT: &str = "TEXTSUM_ENDPOINT";
pub const ENV_MODEL: &str = "TEXTSUM_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "TEXTSUM_TIMEOUT_SECS";
pub const ENV_CONFIG_PATH: &str = "TEXTSUM_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the inference router; the model id is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Hosted model id (e.g., "facebook/bart-large-cnn")
    #[serde(default = "default_model")]
    pub model: String,
    /// Full endpoint URL, overrides base_url + model
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bearer token; prefer TEXTSUM_API_TOKEN or HF_TOKEN
    #[serde(default)]
    pub api_token: Option<ApiToken>,
    /// Whole-request deadline in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Connection establishment deadline in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// HTTP proxy URL (e.g., "http://127.0.0.1:7890" or "socks5://127.0.0.1:1080")
    #[serde(default)]
    pub proxy_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            endpoint: None,
            api_token: None,
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            proxy_url: None,
        }
    }
}

impl ApiConfig {
    /// Resolve the URL the summarization request is posted to
    pub fn endpoint_url(&self) -> crate::Result<Url> {
        match &self.endpoint {
            Some(endpoint) => Ok(Url::parse(endpoint)?),
            None => {
                let base = self.base_url.trim_end_matches('/');
                let model = self.model.trim_matches('/');
                if model.is_empty() {
                    return Err(crate::Error::Config("model id is empty".to_string()));
                }
                Ok(Url::parse(&format!("{base}/{model}"))?)
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptConfig {
    /// Language of the instruction templates
    #[serde(default)]
    pub language: PromptLanguage,
}

/// Bearer credential for the inference API.
///
/// Deliberately has no `Display` or `Serialize`; `Debug` is redacted.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_base_url() -> String {
    "https://router.huggingface.co/hf-inference/models".to_string()
}

fn default_model() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_request_timeout() -> u64 {
    60 // cold models can take a while to answer
}

fn default_connect_timeout() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from file (or defaults) and apply environment overrides
    pub fn load() -> crate::Result<Self> {
        let path = std::env::var_os(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_path);

        let mut config = Self::load_from(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a specific file, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> crate::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty(ENV_API_TOKEN).or_else(|| non_empty(ENV_HF_TOKEN)) {
            self.api.api_token = Some(ApiToken::new(token.trim()));
        }
        if let Some(endpoint) = non_empty(ENV_ENDPOINT) {
            self.api.endpoint = Some(endpoint);
        }
        if let Some(model) = non_empty(ENV_MODEL) {
            self.api.model = model;
        }
        if let Some(secs) = non_empty(ENV_TIMEOUT_SECS) {
            self.api.request_timeout_secs = secs.trim().parse().map_err(|_| {
                crate::Error::Config(format!("{ENV_TIMEOUT_SECS} must be a number of seconds, got '{secs}'"))
            })?;
        }

        Ok(())
    }

    /// Token to authenticate with, if one is configured
    pub fn api_token(&self) -> crate::Result<&ApiToken> {
        self.api
            .api_token
            .as_ref()
            .filter(|token| !token.is_blank())
            .ok_or_else(|| {
                crate::Error::Config(format!(
                    "no API token configured; set {ENV_API_TOKEN} or {ENV_HF_TOKEN}"
                ))
            })
    }

    /// Get the configuration file path
    /// Always uses ~/.config/textsum/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("textsum")
            .join("config.toml")
    }
}
