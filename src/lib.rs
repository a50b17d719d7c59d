use anyhow::{Context, Result};
use teloxide::{dispatching::UpdateHandler, prelude::*};

pub mod ai;
pub mod commands;
pub mod config;
pub mod export;
pub mod flash;
pub mod handlers;
pub mod messages;
pub mod news;
pub mod render;
pub mod session;
mod system_info;
mod text_utils;
mod utils;

pub use commands::Command;
pub use config::{Config, FlashSettings};
pub use flash::{FlashEdition, FlashGenerator, PostStyle};
pub use news::{
    fallback_items, parse_json, parse_labeled, parse_paragraphs, select_items, NewsItem,
    ResponseFormat, Selection, StrategyChain, MAX_ITEMS,
};
pub use session::EditionStore;
pub use system_info::get_system_info;
pub use text_utils::{clean_title, strip_code_fence};

// ──────────────────────────────────────────────────────────────
// Telegram bot setup
// ──────────────────────────────────────────────────────────────

/// Update routing: every supported command goes through [`Command::dispatch`].
/// Expects a [`FlashGenerator`] and an [`EditionStore`] among the dependencies.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    Update::filter_message().branch(
        dptree::entry().filter_command::<Command>().endpoint(
            |bot: Bot,
             msg: Message,
             cmd: Command,
             generator: FlashGenerator,
             store: EditionStore| async move {
                cmd.dispatch(bot, msg, generator, store).await
            },
        ),
    )
}

pub async fn run_bot(config: Config) -> Result<()> {
    let token = std::env::var("TELOXIDE_TOKEN").context("TELOXIDE_TOKEN is not set")?;
    let bot = Bot::new(token);

    if config.ai.is_none() {
        tracing::warn!("No Gemini API key configured, editions will use default content");
    }

    let generator = FlashGenerator::new(config.ai, config.flash);
    let store = EditionStore::new();

    tracing::info!(settings = ?generator.settings(), "Starting flash bot...");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![generator, store])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
