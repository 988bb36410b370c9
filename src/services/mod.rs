pub mod gemini_http;
pub mod instructions;

pub use gemini_http::HttpGeminiClient;
