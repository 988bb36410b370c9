//! Compose a prompt from a prompt spec.

use crate::domain::{Language, PromptSpec, collapse_one_line, compose};

/// Options for the build command.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Output language for labels and toggle sentences.
    pub language: Language,
    /// Collapse the result to a single line.
    pub one_line: bool,
}

/// Result of a build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub prompt: String,
}

/// Compose the spec. Total: an empty spec builds an empty prompt.
pub fn execute(spec: &PromptSpec, options: &BuildOptions) -> BuildResult {
    let prompt = compose(&spec.fields, &spec.toggles, options.language);
    let prompt = if options.one_line { collapse_one_line(&prompt) } else { prompt };
    BuildResult { prompt }
}
