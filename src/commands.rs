use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::flash::FlashGenerator;
use crate::handlers::{help, send_exports, send_flash, send_post, show_system_info};
use crate::session::EditionStore;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "display this text.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "generate today's fintech flash cards.")]
    Flash,
    #[command(description = "show the social post for the last edition.")]
    Post,
    #[command(description = "send the last edition as JSON and text files.")]
    Export,
    #[command(description = "show system information.")]
    Info,
}

impl Command {
    pub async fn dispatch(
        self,
        bot: Bot,
        msg: Message,
        generator: FlashGenerator,
        store: EditionStore,
    ) -> Result<()> {
        tracing::debug!(chat_id = msg.chat.id.0, command = ?self, "Handling command");
        match self {
            Command::Start | Command::Help => help(bot, msg).await?,
            Command::Flash => send_flash(bot, msg, generator, store).await?,
            Command::Post => send_post(bot, msg, store).await?,
            Command::Export => send_exports(bot, msg, store).await?,
            Command::Info => show_system_info(bot, msg).await?,
        }
        Ok(())
    }
}
