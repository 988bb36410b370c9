pub mod compose;
pub mod config;
pub mod error;
pub mod export;
pub mod field;
pub mod language;
pub mod llm;
pub mod parse;
pub mod prompt_spec;
pub mod toggle;

pub use compose::{RECORD_SEPARATOR, collapse_one_line, compose};
pub use config::{API_KEY_ENV, AppConfig, CONFIG_FILE, GeminiConfig};
pub use error::AppError;
pub use export::{ExportOutputs, ExportPayload};
pub use field::{Field, FieldSet};
pub use language::Language;
pub use llm::{LlmError, classify_failure};
pub use parse::parse_sections;
pub use prompt_spec::PromptSpec;
pub use toggle::{Toggle, Toggles};
