//! Translate an Indonesian prompt to English with canonical labels.

use crate::domain::AppError;
use crate::ports::TextGenerator;
use crate::services::instructions;

/// Render the translation instruction for an Indonesian prompt.
pub fn instruction(prompt: &str) -> Result<String, AppError> {
    instructions::translation(prompt)
}

pub fn execute<G: TextGenerator>(
    generator: &G,
    prompt: &str,
    model: &str,
) -> Result<String, AppError> {
    let instruction = instruction(prompt)?;
    Ok(generator.generate(&instruction, model)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LlmError;
    use crate::testing::FakeTextGenerator;

    #[test]
    fn returns_the_translated_text() {
        let generator = FakeTextGenerator::replying("Foreground: A space panda");
        let translated =
            execute(&generator, "Latar Depan: Panda astronot", "gemini-test").unwrap();
        assert_eq!(translated, "Foreground: A space panda");
    }

    #[test]
    fn appends_the_prompt_after_the_instruction() {
        let generator = FakeTextGenerator::replying("ok");
        execute(&generator, "Latar Depan: Panda astronot", "gemini-test").unwrap();
        assert!(generator.calls()[0].prompt.ends_with("\nLatar Depan: Panda astronot"));
    }

    #[test]
    fn propagates_generator_failure() {
        let generator = FakeTextGenerator::failing(LlmError::Network);
        let err = execute(&generator, "Latar Depan: Panda", "gemini-test").unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::Network)));
    }
}
