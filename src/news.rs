// News items and the machinery that extracts them from model replies

use serde::{Deserialize, Serialize};

pub mod fallback;
pub mod parser;
pub mod strategy;

pub use fallback::{fallback_items, FALLBACK_POST};
pub use parser::{parse_json, parse_labeled, parse_paragraphs};
pub use strategy::{select_items, FallbackReason, ItemOrigin, ParseStrategy, Selection, StrategyChain};

/// Upper bound on the number of items in one edition.
pub const MAX_ITEMS: usize = 5;

/// Default minimum number of parsed items before the fallback set is used.
pub const DEFAULT_MIN_ITEMS: usize = 3;

/// One flash card worth of news.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Both fields present and non-blank.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

/// Layout the generator is asked to reply in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ResponseFormat {
    /// `TITLE:` / `CONTENT:` labeled text.
    #[default]
    Labeled,
    /// A JSON object with a `news` array.
    Json,
}

impl std::str::FromStr for ResponseFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "labeled" | "labelled" | "text" => Ok(Self::Labeled),
            "json" => Ok(Self::Json),
            other => Err(anyhow::anyhow!("unknown response format: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completeness_requires_both_fields() {
        assert!(NewsItem::new("A", "one").is_complete());
        assert!(!NewsItem::new("A", "  ").is_complete());
        assert!(!NewsItem::new("", "one").is_complete());
    }

    #[test]
    fn category_is_omitted_from_json_when_absent() {
        let json = serde_json::to_value(NewsItem::new("A", "one")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "A", "content": "one"}));
    }

    #[test]
    fn response_format_from_str() {
        assert_eq!("JSON".parse::<ResponseFormat>().unwrap(), ResponseFormat::Json);
        assert_eq!(
            "labeled".parse::<ResponseFormat>().unwrap(),
            ResponseFormat::Labeled
        );
        assert!("yaml".parse::<ResponseFormat>().is_err());
    }
}
