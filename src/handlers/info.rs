use anyhow::Result;
use teloxide::prelude::*;

use crate::messages::HELP_TEXT;
use crate::system_info::get_system_info;

pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT)
        .parse_mode(teloxide::types::ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn show_system_info(bot: Bot, msg: Message) -> Result<()> {
    tracing::debug!(chat_id = msg.chat.id.0, "Showing system info");
    bot.send_message(msg.chat.id, get_system_info()).await?;
    Ok(())
}
