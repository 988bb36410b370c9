//! xprompt: build structured image-generation prompts (ID ➜ EN).
//!
//! A prompt is eight named sections plus four render toggles, composed into
//! a fixed-order multi-line string in English or Indonesian. The section
//! parser recovers fields from free-form text such as model responses, and
//! the Gemini-backed operations (theme expansion, enhancement, variations,
//! translation) round-trip through that compose/parse contract.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::commands::{build, enhance, interactive, theme, translate, variations};
use services::HttpGeminiClient;

pub use app::commands::build::{BuildOptions, BuildResult};
pub use domain::{
    AppConfig, AppError, CONFIG_FILE, ExportPayload, Field, FieldSet, GeminiConfig, Language,
    LlmError, PromptSpec, Toggle, Toggles, classify_failure, collapse_one_line, compose,
    parse_sections,
};
pub use ports::{StaticTextGenerator, TextGenerator};

/// Load configuration, falling back to defaults when the file is absent.
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    AppConfig::load(path)
}

/// Compose a prompt from a spec file.
pub fn build_from_file(path: &Path, options: &BuildOptions) -> Result<BuildResult, AppError> {
    let spec = PromptSpec::load(path)?;
    Ok(build::execute(&spec, options))
}

/// Compose a prompt from an in-memory spec.
pub fn build_spec(spec: &PromptSpec, options: &BuildOptions) -> BuildResult {
    build::execute(spec, options)
}

/// Collect a spec interactively, then compose it.
pub fn build_interactive(options: &BuildOptions) -> Result<(PromptSpec, BuildResult), AppError> {
    let spec = interactive::collect_spec()?;
    let result = build::execute(&spec, options);
    Ok((spec, result))
}

/// Recover a prompt spec from free-form text. Toggles come back off: the
/// textual format does not encode them.
pub fn parse_to_spec(text: &str) -> PromptSpec {
    PromptSpec { fields: parse_sections(text), toggles: Toggles::default() }
}

/// Expand a theme into field values via the Gemini API.
pub fn expand_theme(
    config: &AppConfig,
    theme: &str,
    style_bias: &str,
    model: &str,
) -> Result<FieldSet, AppError> {
    let client = HttpGeminiClient::from_env(&config.gemini)?;
    theme::execute(&client, theme, style_bias, model)
}

/// Instruction `expand_theme` would send, for dry runs.
pub fn theme_instruction(theme: &str, style_bias: &str) -> Result<String, AppError> {
    theme::instruction(theme, style_bias)
}

/// Polish the spec's English rendition without changing its structure.
pub fn enhance_prompt(
    config: &AppConfig,
    spec: &PromptSpec,
    model: &str,
) -> Result<String, AppError> {
    let client = HttpGeminiClient::from_env(&config.gemini)?;
    enhance::execute(&client, &compose_en(spec), model)
}

/// Instruction `enhance_prompt` would send, for dry runs.
pub fn enhance_instruction(spec: &PromptSpec) -> Result<String, AppError> {
    enhance::instruction(&compose_en(spec))
}

/// Generate alternative prompts from the spec's English rendition.
pub fn variation_prompts(
    config: &AppConfig,
    spec: &PromptSpec,
    count: u32,
    model: &str,
) -> Result<String, AppError> {
    let client = HttpGeminiClient::from_env(&config.gemini)?;
    variations::execute(&client, &compose_en(spec), count, model)
}

/// Instruction `variation_prompts` would send, for dry runs.
pub fn variations_instruction(spec: &PromptSpec, count: u32) -> Result<String, AppError> {
    variations::instruction(&compose_en(spec), count)
}

/// Translate the spec's Indonesian rendition to natural English.
pub fn translate_prompt(
    config: &AppConfig,
    spec: &PromptSpec,
    model: &str,
) -> Result<String, AppError> {
    let client = HttpGeminiClient::from_env(&config.gemini)?;
    translate::execute(&client, &compose_id(spec), model)
}

/// Instruction `translate_prompt` would send, for dry runs.
pub fn translation_instruction(spec: &PromptSpec) -> Result<String, AppError> {
    translate::instruction(&compose_id(spec))
}

/// Render the JSON export payload for a spec.
pub fn export_json(
    spec: &PromptSpec,
    enhanced_en: Option<&str>,
    variations_en: Option<&str>,
) -> Result<String, AppError> {
    ExportPayload::new(spec, enhanced_en, variations_en).to_json()
}

fn compose_en(spec: &PromptSpec) -> String {
    compose(&spec.fields, &spec.toggles, Language::En)
}

fn compose_id(spec: &PromptSpec) -> String {
    compose(&spec.fields, &spec.toggles, Language::Id)
}
