use anyhow::Result;
use chrono::Local;
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile, ParseMode},
};

use crate::export::{file_stem, to_json, to_text};
use crate::flash::{FlashEdition, FlashGenerator};
use crate::messages::{cards_header, GENERATING, NO_EDITION_YET, POST_HEADER};
use crate::render::format_card_html;
use crate::session::EditionStore;
use crate::utils::try_delete_message;

/// Generate today's edition, send it and remember it for this chat.
pub async fn send_flash(
    bot: Bot,
    msg: Message,
    generator: FlashGenerator,
    store: EditionStore,
) -> Result<()> {
    let chat_id = msg.chat.id;
    tracing::debug!(chat_id = chat_id.0, "Generating flash edition");

    let status = bot.send_message(chat_id, GENERATING).await?;
    let edition = generator.generate(Local::now().date_naive()).await;
    try_delete_message(&bot, chat_id, status.id).await;

    send_edition(&bot, chat_id, &edition).await?;
    store.replace(chat_id, edition).await;
    Ok(())
}

/// Send the notice (if any), the header, one message per card and the post.
pub async fn send_edition(bot: &Bot, chat_id: ChatId, edition: &FlashEdition) -> Result<()> {
    if let Some(notice) = edition.notice() {
        bot.send_message(chat_id, notice).await?;
    }

    bot.send_message(chat_id, cards_header(&edition.long_date(), edition.items.len()))
        .await?;

    for (i, item) in edition.items.iter().enumerate() {
        bot.send_message(chat_id, format_card_html(i + 1, item))
            .parse_mode(ParseMode::Html)
            .await?;
    }

    send_post_text(bot, chat_id, edition).await?;
    tracing::info!(
        chat_id = chat_id.0,
        cards = edition.items.len(),
        fallback = edition.is_fallback(),
        "Sent flash edition"
    );
    Ok(())
}

async fn send_post_text(bot: &Bot, chat_id: ChatId, edition: &FlashEdition) -> Result<()> {
    bot.send_message(chat_id, format!("{POST_HEADER}\n\n{}", edition.post))
        .await?;
    Ok(())
}

pub async fn send_post(bot: Bot, msg: Message, store: EditionStore) -> Result<()> {
    match store.get(msg.chat.id).await {
        Some(edition) => send_post_text(&bot, msg.chat.id, &edition).await?,
        None => {
            bot.send_message(msg.chat.id, NO_EDITION_YET).await?;
        }
    }
    Ok(())
}

/// Build the two export attachments for an edition.
pub fn export_files(edition: &FlashEdition) -> Result<[InputFile; 2]> {
    let stem = file_stem(edition.date);
    let json = InputFile::memory(to_json(edition)?.into_bytes()).file_name(format!("{stem}.json"));
    let text = InputFile::memory(to_text(edition).into_bytes()).file_name(format!("{stem}.txt"));
    Ok([json, text])
}

pub async fn send_exports(bot: Bot, msg: Message, store: EditionStore) -> Result<()> {
    let Some(edition) = store.get(msg.chat.id).await else {
        bot.send_message(msg.chat.id, NO_EDITION_YET).await?;
        return Ok(());
    };

    for file in export_files(&edition)? {
        bot.send_document(msg.chat.id, file).await?;
    }
    tracing::debug!(chat_id = msg.chat.id.0, date = %edition.date, "Sent exports");
    Ok(())
}
