//! Prompt composition.

use super::{Field, FieldSet, Language, Toggles};

/// Separator between composed records: a space followed by a newline.
///
/// This exact two-character sequence is a format contract shared with the
/// section parser and with one-line collapsing; downstream consumers match
/// it bit-for-bit.
pub const RECORD_SEPARATOR: &str = " \n";

/// Compose a structured prompt from field values and render toggles.
///
/// Fields are emitted in canonical order as `label: value` lines, skipping
/// any whose trimmed value is blank. Enabled toggles contribute one fixed
/// sentence each, after all field lines. Never fails; composing nothing
/// yields the empty string.
pub fn compose(fields: &FieldSet, toggles: &Toggles, language: Language) -> String {
    let mut parts: Vec<String> = Vec::new();

    for field in Field::ALL {
        let value = fields.get(field).map(str::trim).unwrap_or("");
        if !value.is_empty() {
            parts.push(format!("{}: {}", field.label(language), value));
        }
    }

    for toggle in toggles.enabled() {
        parts.push(toggle.sentence(language).to_string());
    }

    parts.join(RECORD_SEPARATOR)
}

/// Collapse a composed prompt to a single line.
///
/// Every whitespace run, including the record separator, becomes one space;
/// leading and trailing whitespace is dropped.
pub fn collapse_one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
