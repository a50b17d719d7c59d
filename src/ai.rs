pub mod common;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompts;

pub use config::AiConfig;
pub use error::UpstreamError;
