pub mod text_generator;

pub use text_generator::{StaticTextGenerator, TextGenerator};
