//! Interactive prompt-spec builder.

use dialoguer::{Confirm, Input};

use crate::domain::{AppError, Field, PromptSpec, Toggles};

/// Collect a prompt spec by asking for each field and toggle in turn.
///
/// Blank answers leave a field unset. Toggle defaults: static camera,
/// ultra-sharp focus, and diagonal lighting on; black background off.
pub fn collect_spec() -> Result<PromptSpec, AppError> {
    let mut spec = PromptSpec::default();

    for field in Field::ALL {
        let value: String = Input::new()
            .with_prompt(field.label_en())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::config_error(format!("Field input failed: {e}")))?;
        if !value.trim().is_empty() {
            spec.fields.set(field, value);
        }
    }

    spec.toggles = Toggles {
        static_camera: confirm("Lock camera (static)", true)?,
        black_bg: confirm("Force black background", false)?,
        ultra_sharp: confirm("Ultra-sharp focus", true)?,
        diag_lighting: confirm("Dramatic diagonal lighting (BL → TR)", true)?,
    };

    Ok(spec)
}

fn confirm(prompt: &str, default: bool) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| AppError::config_error(format!("Toggle input failed: {e}")))
}
