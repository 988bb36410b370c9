use std::io;

use thiserror::Error;

use super::LlmError;

/// Library-wide error type for xprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown output language code.
    #[error("Unknown language '{0}': expected EN or ID")]
    UnknownLanguage(String),

    /// An instruction template failed to render.
    #[error("Failed to render {name} instruction: {reason}")]
    Template { name: String, reason: String },

    /// The text-generation call failed.
    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
