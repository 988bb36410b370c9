//! Text-generation port definition.

use crate::domain::LlmError;

/// Port for LLM text generation: instruction in, plain text out.
///
/// The credential is adapter state; the model is chosen per call, the way
/// the surrounding tool lets users switch models between requests. The
/// returned text is opaque to callers, which either display it or feed it
/// to the section parser.
pub trait TextGenerator {
    fn generate(&self, prompt: &str, model: &str) -> Result<String, LlmError>;
}

/// Generator that always returns the same canned text.
///
/// Useful as a stand-in when exercising callers without network access.
#[derive(Debug, Clone, Default)]
pub struct StaticTextGenerator {
    response: String,
}

impl StaticTextGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: response.into() }
    }
}

impl TextGenerator for StaticTextGenerator {
    fn generate(&self, _prompt: &str, _model: &str) -> Result<String, LlmError> {
        Ok(self.response.clone())
    }
}
