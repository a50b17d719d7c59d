//! Prompts sent to the text generator.
//!
//! Centralizing these strings makes it easy to tweak the reply layout without
//! touching the parsers, as long as the label names stay the same.

/// Labeled-text request. The reply is read by [`crate::news::parse_labeled`].
pub fn labeled_news_prompt(long_date: &str) -> String {
    format!(
        "Generate exactly 5 crisp, current fintech and marketing news items specifically for India for {long_date}.\n\
         Focus on:\n\
         - Digital payments (UPI, wallets, etc.)\n\
         - Banking technology\n\
         - Cryptocurrency regulations\n\
         - Startup funding\n\
         - Marketing trends in fintech\n\
         - Government policies\n\
         - Neobanks and lending platforms\n\n\
         Format each news item as:\n\
         TITLE: [Engaging headline in 8-12 words]\n\
         CONTENT: [2-3 crisp sentences with key details, impact, and numbers if available]\n\n\
         Separate items with a blank line. Make it current, relevant, and engaging for a LinkedIn audience."
    )
}

/// JSON request. The reply is read by [`crate::news::parse_json`].
pub fn json_news_prompt(long_date: &str) -> String {
    format!(
        "Generate exactly 5 crisp, current fintech news items specifically for India for {long_date}.\n\n\
         Each news item should:\n\
         - Be real and credible (based on recent trends in Indian fintech)\n\
         - Be 2-3 sentences maximum\n\
         - Include specific company names, numbers, or locations when possible\n\
         - Focus on: payments, digital banking, cryptocurrency, lending, insurtech, or fintech regulations in India\n\n\
         Return as JSON format:\n\
         {{\"news\": [{{\"title\": \"Brief catchy title\", \"content\": \"2-3 sentence description\", \"category\": \"category like 'Payments', 'Digital Banking', etc.\"}}]}}"
    )
}

/// Request for a LinkedIn post about already selected items.
pub fn social_post_prompt(items_json: &str) -> String {
    format!(
        "Create an engaging LinkedIn post for sharing today's top 5 Indian fintech news.\n\n\
         News items:\n{items_json}\n\n\
         The post should:\n\
         - Start with an engaging hook about Indian fintech\n\
         - Mention it's a daily series \"India Fintech Flash ⚡\"\n\
         - Use relevant emojis and hashtags\n\
         - Be professional yet engaging\n\
         - Include call-to-action for engagement\n\
         - Keep it under 300 words"
    )
}
