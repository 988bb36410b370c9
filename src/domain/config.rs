//! Tool configuration loaded from `xprompt.toml`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use super::AppError;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "xprompt.toml";

/// Environment variable holding the Gemini API key.
///
/// The credential never lives in the config file.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration for xprompt, loaded from `xprompt.toml` when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Gemini API configuration.
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Load configuration from the given path, or defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Model used for generation calls unless overridden per invocation.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the Generative Language API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl GeminiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("model must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_model() -> String {
    // Largest free-tier daily allowance of the supported models.
    "gemini-1.5-flash-8b".to_string()
}

fn default_api_base_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}
