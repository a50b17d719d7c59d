//! One generation cycle: fetch a reply, pick items, write the social post.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::ai::gemini::{fetch_news_text, generate_social_post};
use crate::ai::{AiConfig, UpstreamError};
use crate::config::FlashSettings;
use crate::news::{select_items, ItemOrigin, NewsItem, Selection, StrategyChain, FALLBACK_POST};
use crate::render::compose_social_post;

/// How the companion social post is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PostStyle {
    /// Fixed template listing the headlines.
    #[default]
    Template,
    /// Written by the model, with a fixed post on failure.
    Generated,
}

impl std::str::FromStr for PostStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(Self::Template),
            "generated" | "ai" => Ok(Self::Generated),
            other => Err(anyhow::anyhow!("unknown post style: {other}")),
        }
    }
}

/// `October 16, 2026`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// The result of one generation request. Replaces any previous edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashEdition {
    pub date: NaiveDate,
    pub items: Vec<NewsItem>,
    pub origin: ItemOrigin,
    pub post: String,
}

impl FlashEdition {
    pub fn long_date(&self) -> String {
        long_date(self.date)
    }

    pub fn is_fallback(&self) -> bool {
        self.origin.is_fallback()
    }

    /// Soft warning when default content is shown.
    pub fn notice(&self) -> Option<String> {
        self.origin.notice()
    }
}

#[derive(Clone, Debug)]
pub struct FlashGenerator {
    ai: Option<AiConfig>,
    settings: FlashSettings,
}

impl FlashGenerator {
    pub fn new(ai: Option<AiConfig>, settings: FlashSettings) -> Self {
        Self { ai, settings }
    }

    pub fn settings(&self) -> &FlashSettings {
        &self.settings
    }

    /// Produce the edition for `date`. Never fails: every failure path ends in
    /// the default items.
    pub async fn generate(&self, date: NaiveDate) -> FlashEdition {
        let long_date = long_date(date);
        let upstream = match &self.ai {
            Some(ai) => fetch_news_text(ai, self.settings.format, &long_date).await,
            None => Err(UpstreamError::MissingCredential),
        };
        let selection = self.select(upstream);
        let post = self.compose_post(&selection.items, &long_date).await;

        info!(
            %date,
            count = selection.items.len(),
            fallback = selection.is_fallback(),
            "Flash edition ready"
        );

        FlashEdition {
            date,
            items: selection.items,
            origin: selection.origin,
            post,
        }
    }

    /// Apply the configured strategy chain and threshold to a reply.
    pub fn select(&self, upstream: Result<String, UpstreamError>) -> Selection {
        let chain = StrategyChain::for_format(self.settings.format);
        select_items(upstream, &chain, self.settings.min_items)
    }

    async fn compose_post(&self, items: &[NewsItem], long_date: &str) -> String {
        match (self.settings.post_style, &self.ai) {
            (PostStyle::Generated, Some(ai)) => match generate_social_post(ai, items).await {
                Ok(post) if !post.is_empty() => post,
                Ok(_) => {
                    warn!("Generated post was empty, using default post");
                    FALLBACK_POST.to_string()
                }
                Err(err) => {
                    warn!(error = %err, "Post generation failed, using default post");
                    FALLBACK_POST.to_string()
                }
            },
            (PostStyle::Generated, None) => FALLBACK_POST.to_string(),
            (PostStyle::Template, _) => compose_social_post(items, long_date),
        }
    }
}
