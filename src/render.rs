// Flash card and social post rendering

use teloxide::utils::html;

use crate::messages;
use crate::news::NewsItem;

struct CardFormatter;

impl CardFormatter {
    fn card_text(index: usize, item: &NewsItem) -> String {
        let mut card = format!("#{index} 💡 {}\n{}", item.title, item.content);
        if let Some(category) = &item.category {
            card.push_str(&format!("\n📊 {category}"));
        }
        card
    }

    fn card_html(index: usize, item: &NewsItem) -> String {
        let mut card = format!(
            "<b>#{index} 💡 {}</b>\n\n{}",
            html::escape(&item.title),
            html::escape(&item.content)
        );
        if let Some(category) = &item.category {
            card.push_str(&format!("\n\n<i>📊 {}</i>", html::escape(category)));
        }
        card
    }
}

/// Plain text rendering of all cards under a dated header.
pub fn format_cards(items: &[NewsItem], long_date: &str) -> String {
    let mut text = messages::cards_header(long_date, items.len());
    text.push_str("\n\n");
    let cards: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| CardFormatter::card_text(i + 1, item))
        .collect();
    text.push_str(&cards.join("\n\n"));
    text.push('\n');
    text
}

/// One card as Telegram HTML. `index` starts at 1.
pub fn format_card_html(index: usize, item: &NewsItem) -> String {
    CardFormatter::card_html(index, item)
}

/// Compose the templated LinkedIn post: header, one line per headline,
/// call to action and hashtags.
pub fn compose_social_post(items: &[NewsItem], long_date: &str) -> String {
    let mut post = format!(
        "🚀 FINTECH FLASH INDIA | {long_date} 🇮🇳\n\n\
         Your daily dose of crisp fintech & marketing updates! ⚡\n\n"
    );
    for item in items {
        post.push_str(&format!("📌 {}\n", item.title));
    }
    post.push_str(
        "\n💡 Swipe through today's flashcards for detailed insights!\n\n\
         What's catching your attention in today's fintech landscape?\n\
         Drop your thoughts below! 👇\n\n\
         #FintechIndia #DigitalPayments #UPI #Banking #Startup #Marketing #TechNews #India #Finance #Innovation\n\n\
         ---\n\
         Follow for daily fintech updates! 🔔\n",
    );
    post
}
