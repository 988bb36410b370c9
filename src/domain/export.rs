//! JSON export payload for a prompt build.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::{AppError, Field, FieldSet, Language, PromptSpec, Toggles, collapse_one_line, compose};

/// Rendered outputs in both languages plus optional LLM products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportOutputs {
    pub id: String,
    pub en: String,
    pub one_line_id: String,
    pub one_line_en: String,
    pub enhanced_en: String,
    pub variations_en: String,
}

/// Full export record for a prompt build.
///
/// `fields` always carries all eight labels (blank when unset) so the
/// record is self-describing without knowledge of the canonical set.
#[derive(Debug, Clone, Serialize)]
pub struct ExportPayload {
    #[serde(serialize_with = "serialize_complete_fields")]
    pub fields: FieldSet,
    pub toggles: Toggles,
    pub outputs: ExportOutputs,
    pub generated_at: String,
}

impl ExportPayload {
    /// Build the export record, composing both language renditions.
    pub fn new(
        spec: &PromptSpec,
        enhanced_en: Option<&str>,
        variations_en: Option<&str>,
    ) -> Self {
        let en = compose(&spec.fields, &spec.toggles, Language::En);
        let id = compose(&spec.fields, &spec.toggles, Language::Id);

        Self {
            fields: spec.fields.clone(),
            toggles: spec.toggles,
            outputs: ExportOutputs {
                one_line_id: collapse_one_line(&id),
                one_line_en: collapse_one_line(&en),
                id,
                en,
                enhanced_en: enhanced_en.unwrap_or_default().to_string(),
                variations_en: variations_en.unwrap_or_default().to_string(),
            },
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Emit every canonical field in composition order, blank when unset.
fn serialize_complete_fields<S: Serializer>(
    fields: &FieldSet,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(Field::ALL.len()))?;
    for field in Field::ALL {
        map.serialize_entry(field.label_en(), fields.get(field).unwrap_or(""))?;
    }
    map.end()
}
