//! Theme expansion: ask the model to draft all eight sections from a theme.

use crate::domain::{AppError, FieldSet, parse_sections};
use crate::ports::TextGenerator;
use crate::services::instructions;

/// Render the expansion instruction for a theme and style bias.
pub fn instruction(theme: &str, style_bias: &str) -> Result<String, AppError> {
    let theme = theme.trim();
    if theme.is_empty() {
        return Err(AppError::config_error("Theme must not be empty"));
    }
    instructions::theme_expansion(theme, style_bias.trim())
}

/// Expand a theme into field values.
///
/// The model's response is best-effort text; whatever sections the parser
/// recovers are returned, which may be fewer than eight.
pub fn execute<G: TextGenerator>(
    generator: &G,
    theme: &str,
    style_bias: &str,
    model: &str,
) -> Result<FieldSet, AppError> {
    let instruction = instruction(theme, style_bias)?;
    let response = generator.generate(&instruction, model)?;
    Ok(parse_sections(&response))
}
