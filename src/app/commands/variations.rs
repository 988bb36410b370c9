//! Generate alternative prompts with the same structure.

use crate::domain::AppError;
use crate::ports::TextGenerator;
use crate::services::instructions;

/// Accepted range for the variation count.
pub const MIN_VARIATIONS: u32 = 1;
pub const MAX_VARIATIONS: u32 = 10;

/// Render the variations instruction for a composed prompt.
pub fn instruction(prompt: &str, count: u32) -> Result<String, AppError> {
    if !(MIN_VARIATIONS..=MAX_VARIATIONS).contains(&count) {
        return Err(AppError::config_error(format!(
            "Variation count must be between {MIN_VARIATIONS} and {MAX_VARIATIONS}, got {count}"
        )));
    }
    instructions::variations(prompt, count)
}

pub fn execute<G: TextGenerator>(
    generator: &G,
    prompt: &str,
    count: u32,
    model: &str,
) -> Result<String, AppError> {
    let instruction = instruction(prompt, count)?;
    Ok(generator.generate(&instruction, model)?)
}
