use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::ChatId;
use tokio::sync::Mutex;

use crate::flash::FlashEdition;

/// Last edition generated in each chat, kept in memory only.
///
/// A new edition fully replaces the previous one.
#[derive(Clone, Default)]
pub struct EditionStore {
    editions: Arc<Mutex<HashMap<ChatId, FlashEdition>>>,
}

impl EditionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, chat_id: ChatId, edition: FlashEdition) {
        tracing::debug!(chat_id = chat_id.0, date = %edition.date, "Storing edition");
        self.editions.lock().await.insert(chat_id, edition);
    }

    pub async fn get(&self, chat_id: ChatId) -> Option<FlashEdition> {
        self.editions.lock().await.get(&chat_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::{fallback_items, FallbackReason, ItemOrigin};
    use chrono::NaiveDate;

    fn edition(day: u32) -> FlashEdition {
        FlashEdition {
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            items: fallback_items(),
            origin: ItemOrigin::Fallback(FallbackReason::InsufficientItems {
                found: 0,
                required: 3,
            }),
            post: String::new(),
        }
    }

    #[tokio::test]
    async fn replace_overwrites_per_chat() {
        let store = EditionStore::new();
        assert!(store.get(ChatId(1)).await.is_none());

        store.replace(ChatId(1), edition(15)).await;
        store.replace(ChatId(1), edition(16)).await;
        store.replace(ChatId(2), edition(1)).await;

        assert_eq!(store.get(ChatId(1)).await.unwrap().date.to_string(), "2026-10-16");
        assert_eq!(store.get(ChatId(2)).await.unwrap().date.to_string(), "2026-10-01");
    }
}
