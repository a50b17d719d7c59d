use std::env;

use crate::ai::config::AiConfig;
use crate::flash::PostStyle;
use crate::news::{ResponseFormat, DEFAULT_MIN_ITEMS};

/// Knobs for one generation cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashSettings {
    /// Parsed items needed before the reply is used instead of the default set.
    pub min_items: usize,
    pub format: ResponseFormat,
    pub post_style: PostStyle,
}

impl Default for FlashSettings {
    fn default() -> Self {
        Self {
            min_items: DEFAULT_MIN_ITEMS,
            format: ResponseFormat::default(),
            post_style: PostStyle::default(),
        }
    }
}

impl FlashSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_items: env_parse("FLASH_MIN_ITEMS").unwrap_or(defaults.min_items),
            format: env_parse("FLASH_RESPONSE_FORMAT").unwrap_or(defaults.format),
            post_style: env_parse("FLASH_POST_STYLE").unwrap_or(defaults.post_style),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring invalid setting");
            None
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub ai: Option<AiConfig>,
    pub flash: FlashSettings,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            ai: AiConfig::from_env(),
            flash: FlashSettings::from_env(),
        }
    }
}
