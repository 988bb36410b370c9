//! Failure taxonomy for the text-generation boundary.

use thiserror::Error;

/// Categorized failure from a text-generation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    /// The free-tier request allowance ran out.
    #[error(
        "daily quota exceeded: the request allowance for this model is used up; \
         wait for the quota reset or switch to a model with a larger allowance"
    )]
    QuotaExceeded,

    /// The API rejected the credential.
    #[error("invalid API key: check the GEMINI_API_KEY value")]
    InvalidCredential,

    /// The API could not be reached.
    #[error("could not reach the Gemini API: check the network connection and try again")]
    Network,

    /// Anything else, with the original detail preserved.
    #[error("Gemini call failed: {0}")]
    Unknown(String),
}

/// Classify a failure by its description text.
///
/// Operates on the description alone; no HTTP or client types involved.
/// Unrecognized descriptions are wrapped unchanged.
pub fn classify_failure(detail: &str) -> LlmError {
    let lowered = detail.to_lowercase();
    if detail.contains("429") || lowered.contains("quota") || lowered.contains("resource_exhausted")
    {
        LlmError::QuotaExceeded
    } else if detail.contains("401")
        || lowered.contains("unauthorized")
        || lowered.contains("invalid key")
    {
        LlmError::InvalidCredential
    } else if lowered.contains("network")
        || lowered.contains("connection")
        || lowered.contains("timeout")
    {
        LlmError::Network
    } else {
        LlmError::Unknown(detail.to_string())
    }
}
