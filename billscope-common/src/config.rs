//! Configuration loading for billscope.
//!
//! Configuration comes from an optional JSON file in the user's config
//! directory, with environment-variable overrides applied on top. The one
//! required value is the inference-service API key; loading fails if it
//! cannot be resolved.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the inference-service API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Billscope configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Inference-service API key. Resolved from the config file or the
    /// `GROQ_API_KEY` environment variable (the environment wins).
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier sent with every analysis request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for analysis requests.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum output tokens per analysis.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i64,

    /// Base URL of the OpenAI-compatible inference endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for fetching remote documents, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// User-Agent header sent when fetching remote documents.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Base log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format: "pretty" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f64 {
    0.1
}

fn default_max_tokens() -> i64 {
    3000
}

fn default_base_url() -> String {
    "https://api.groq.com/openai".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    20
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            base_url: default_base_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            user_agent: default_user_agent(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Path of the config file in the user's config directory.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "billscope").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default path, apply environment
    /// overrides, and verify the required credential is present.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let mut config = match path.as_deref() {
            Some(p) if p.exists() => Self::from_file(p)?,
            _ => Self::default(),
        };
        config.apply_env();
        config.require_api_key()?;
        Ok(config)
    }

    /// Parse configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("Invalid config {}: {e}", path.display())))
    }

    /// Overlay values from the environment.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
    }

    /// Fail with a fatal configuration error when no API key is resolvable.
    pub fn require_api_key(&self) -> Result<()> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(()),
            _ => Err(Error::Config(format!(
                "{API_KEY_ENV} not found. Set the environment variable or add \"api_key\" to the config file."
            ))),
        }
    }

    /// The resolved API key. Empty until `require_api_key` has passed.
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }
}
