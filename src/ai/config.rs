use std::env;
use std::fmt;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-04-17";

#[derive(Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL override, mainly for tests and proxies.
    pub api_url: Option<String>,
}

impl AiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_url: None,
        }
    }

    /// Read `GEMINI_API_KEY` (or `GOOGLE_API_KEY`), `GEMINI_MODEL` and
    /// `GEMINI_API_URL`. Returns `None` when no non-empty key is set.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("GOOGLE_API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())?;
        Some(Self {
            api_key,
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            api_url: env::var("GEMINI_API_URL").ok(),
        })
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_key() {
        let cfg = AiConfig::new("secret-key");
        let printed = format!("{cfg:?}");
        assert!(!printed.contains("secret-key"));
        assert!(printed.contains(DEFAULT_GEMINI_MODEL));
    }
}
