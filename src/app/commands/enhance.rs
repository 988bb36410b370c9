//! Polish a composed prompt without changing its structure.

use crate::domain::AppError;
use crate::ports::TextGenerator;
use crate::services::instructions;

/// Render the enhancement instruction for a composed prompt.
pub fn instruction(prompt: &str) -> Result<String, AppError> {
    instructions::enhance(prompt)
}

pub fn execute<G: TextGenerator>(
    generator: &G,
    prompt: &str,
    model: &str,
) -> Result<String, AppError> {
    let instruction = instruction(prompt)?;
    Ok(generator.generate(&instruction, model)?)
}
