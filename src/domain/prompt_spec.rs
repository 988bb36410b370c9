//! Prompt spec files: field values and toggles as TOML.
//!
//! The spec file is both hand-writable and the machine output of `parse`,
//! so `parse | build` round-trips through it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AppError, FieldSet, Toggles};

/// Field values plus render toggles, the on-disk input to composition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptSpec {
    pub fields: FieldSet,
    pub toggles: Toggles,
}

impl PromptSpec {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
