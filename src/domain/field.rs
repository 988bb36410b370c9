use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::Language;

/// The eight canonical sections of a structured scene prompt.
///
/// Declaration order is composition order; it drives both the composed
/// output and the order in which recovered fields are re-emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Foreground,
    Midground,
    Background,
    FloatingElements,
    CentralBanner,
    TextAndEffects,
    BackgroundStyle,
    StyleAndLighting,
}

impl Field {
    /// All canonical fields in composition order.
    pub const ALL: [Field; 8] = [
        Field::Foreground,
        Field::Midground,
        Field::Background,
        Field::FloatingElements,
        Field::CentralBanner,
        Field::TextAndEffects,
        Field::BackgroundStyle,
        Field::StyleAndLighting,
    ];

    /// Canonical English label. Also the key used in spec files and exports.
    pub fn label_en(&self) -> &'static str {
        match self {
            Field::Foreground => "Foreground",
            Field::Midground => "Midground",
            Field::Background => "Background",
            Field::FloatingElements => "Floating Elements",
            Field::CentralBanner => "Central Banner",
            Field::TextAndEffects => "Text & Effects",
            Field::BackgroundStyle => "Background Style",
            Field::StyleAndLighting => "Style & Lighting",
        }
    }

    /// Fixed Indonesian label.
    pub fn label_id(&self) -> &'static str {
        match self {
            Field::Foreground => "Latar Depan",
            Field::Midground => "Lapisan Tengah",
            Field::Background => "Latar Belakang",
            Field::FloatingElements => "Elemen Mengambang",
            Field::CentralBanner => "Papan Utama",
            Field::TextAndEffects => "Teks & Efek",
            Field::BackgroundStyle => "Gaya Latar",
            Field::StyleAndLighting => "Gaya & Pencahayaan",
        }
    }

    /// Label in the requested output language.
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.label_en(),
            Language::Id => self.label_id(),
        }
    }

    /// Resolve a canonical English label back to its field.
    pub fn from_label(label: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.label_en() == label)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label_en())
    }
}

/// Values for the canonical fields, iterated in composition order.
///
/// Absent and blank values are equivalent for composition; the set only
/// tracks what the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet(BTreeMap<Field, String>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's value, replacing any previous value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the supplied fields in composition order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

impl FromIterator<(Field, String)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for FieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, value) in &self.0 {
            map.serialize_entry(field.label_en(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut fields = FieldSet::new();
        for (label, value) in raw {
            let field = Field::from_label(&label).ok_or_else(|| {
                de::Error::custom(format!(
                    "unknown field label '{label}': expected one of {}",
                    Field::ALL.map(|f| f.label_en()).join(", ")
                ))
            })?;
            fields.set(field, value);
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_is_composition_order() {
        assert_eq!(Field::ALL[0], Field::Foreground);
        assert_eq!(Field::ALL[7], Field::StyleAndLighting);
        // Ord follows declaration order, so a BTreeMap iterates canonically.
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }

    #[test]
    fn labels_are_unique_across_languages() {
        let mut labels: Vec<&str> =
            Field::ALL.iter().flat_map(|f| [f.label_en(), f.label_id()]).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 16);
    }

    #[test]
    fn from_label_roundtrips() {
        for field in Field::ALL {
            assert_eq!(Field::from_label(field.label_en()), Some(field));
        }
        assert_eq!(Field::from_label("Latar Depan"), None);
        assert_eq!(Field::from_label("foreground"), None);
    }

    #[test]
    fn field_set_iterates_in_composition_order() {
        let mut fields = FieldSet::new();
        fields.set(Field::StyleAndLighting, "neon");
        fields.set(Field::Foreground, "a panda");
        let order: Vec<Field> = fields.iter().map(|(field, _)| field).collect();
        assert_eq!(order, vec![Field::Foreground, Field::StyleAndLighting]);
    }

    #[test]
    fn field_set_set_replaces_value() {
        let mut fields = FieldSet::new();
        fields.set(Field::Background, "sky");
        fields.set(Field::Background, "sea");
        assert_eq!(fields.get(Field::Background), Some("sea"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn field_set_serializes_with_english_labels() {
        let mut fields = FieldSet::new();
        fields.set(Field::TextAndEffects, "sparkles");
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"Text & Effects":"sparkles"}"#);
    }

    #[test]
    fn field_set_deserializes_known_labels() {
        let fields: FieldSet =
            serde_json::from_str(r#"{"Foreground":"a cat","Central Banner":"WELCOME"}"#).unwrap();
        assert_eq!(fields.get(Field::Foreground), Some("a cat"));
        assert_eq!(fields.get(Field::CentralBanner), Some("WELCOME"));
    }

    #[test]
    fn field_set_rejects_unknown_label() {
        let result: Result<FieldSet, _> = serde_json::from_str(r#"{"Sky":"blue"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field label 'Sky'"), "unexpected error: {err}");
    }
}
