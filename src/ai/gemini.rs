use tracing::instrument;

use super::common::generate_text;
use super::config::AiConfig;
use super::error::UpstreamError;
use super::prompts::{json_news_prompt, labeled_news_prompt, social_post_prompt};
use crate::news::{NewsItem, ResponseFormat};

/// Ask Gemini for today's raw news reply in the requested layout.
///
/// The text is returned unparsed; see [`crate::news::select_items`].
#[instrument(level = "debug", skip(config), fields(model = %config.model))]
pub async fn fetch_news_text(
    config: &AiConfig,
    format: ResponseFormat,
    long_date: &str,
) -> Result<String, UpstreamError> {
    let (prompt, json_reply) = match format {
        ResponseFormat::Labeled => (labeled_news_prompt(long_date), false),
        ResponseFormat::Json => (json_news_prompt(long_date), true),
    };
    generate_text(
        &config.api_key,
        &config.model,
        &prompt,
        json_reply,
        config.api_url.as_deref(),
    )
    .await
}

/// Ask Gemini to write a LinkedIn post about the given items.
#[instrument(level = "debug", skip(config, items), fields(model = %config.model, count = items.len()))]
pub async fn generate_social_post(
    config: &AiConfig,
    items: &[NewsItem],
) -> Result<String, UpstreamError> {
    let items_json = serde_json::to_string_pretty(items)?;
    let prompt = social_post_prompt(&items_json);
    let text = generate_text(
        &config.api_key,
        &config.model,
        &prompt,
        false,
        config.api_url.as_deref(),
    )
    .await?;
    Ok(text.trim().to_string())
}
