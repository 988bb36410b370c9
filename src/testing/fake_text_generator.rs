use std::sync::{Arc, Mutex};

use crate::domain::LlmError;
use crate::ports::TextGenerator;

/// One recorded call to the fake generator.
#[derive(Debug, Clone)]
pub struct GenerateCall {
    pub prompt: String,
    pub model: String,
}

/// Recording generator with a canned outcome.
#[derive(Debug, Clone)]
pub struct FakeTextGenerator {
    calls: Arc<Mutex<Vec<GenerateCall>>>,
    outcome: Result<String, LlmError>,
}

impl FakeTextGenerator {
    pub fn replying(response: impl Into<String>) -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), outcome: Ok(response.into()) }
    }

    pub fn failing(error: LlmError) -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), outcome: Err(error) }
    }

    pub fn calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextGenerator for FakeTextGenerator {
    fn generate(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push(GenerateCall { prompt: prompt.to_string(), model: model.to_string() });
        self.outcome.clone()
    }
}
