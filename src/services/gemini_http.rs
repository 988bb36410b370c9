//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{API_KEY_ENV, AppError, GeminiConfig, LlmError, classify_failure};
use crate::ports::TextGenerator;

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// HTTP client for the Generative Language API.
///
/// One attempt per call; failures surface as classified [`LlmError`]s and
/// retry policy stays with the caller.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    api_base_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Unknown(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { api_key, api_base_url: config.api_base_url.clone(), client })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env(config: &GeminiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            AppError::Configuration(format!("{API_KEY_ENV} environment variable not set"))
        })?;

        Ok(Self::new(api_key, config)?)
    }

    fn endpoint(&self, model: &str) -> Result<Url, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.api_base_url.as_str().trim_end_matches('/'),
            model
        );
        Url::parse(&url).map_err(|e| LlmError::Unknown(format!("invalid endpoint '{url}': {e}")))
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl TextGenerator for HttpGeminiClient {
    fn generate(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
        let request = ApiRequest {
            contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
        };

        let response = self
            .client
            .post(self.endpoint(model)?)
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(classify_failure(&format!("{} {}", status.as_u16(), body)));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| LlmError::Unknown(format!("failed to parse response: {e}")))?;

        extract_text(api_response)
    }
}

/// Map a reqwest transport failure to the error taxonomy.
///
/// Timeouts and connect failures are structurally detectable; everything
/// else goes through the string classifier.
fn transport_error(error: &reqwest::Error) -> LlmError {
    if error.is_timeout() || error.is_connect() {
        LlmError::Network
    } else {
        classify_failure(&error.to_string())
    }
}

fn extract_text(response: ApiResponse) -> Result<String, LlmError> {
    let parts: Vec<String> = response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .filter_map(|part| part.text)
        .collect();

    if parts.is_empty() {
        return Err(LlmError::Unknown("response contained no text parts".to_string()));
    }

    Ok(parts.concat())
}
