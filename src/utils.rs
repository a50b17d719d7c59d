use teloxide::{
    prelude::*,
    types::{ChatId, MessageId},
};

/// Attempt to delete a message and log a warning on failure.
pub async fn try_delete_message(bot: &Bot, chat_id: ChatId, message_id: MessageId) {
    if let Err(err) = bot.delete_message(chat_id, message_id).await {
        tracing::warn!(
            error = %err,
            chat_id = chat_id.0,
            message_id = message_id.0,
            "Failed to delete message",
        );
    }
}
