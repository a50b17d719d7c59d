//! Fixed content shown when generation or parsing falls short.

use super::NewsItem;

/// The five default items. Always complete, always exactly five.
pub fn fallback_items() -> Vec<NewsItem> {
    vec![
        NewsItem::new(
            "PhonePe Crosses 500M Users",
            "PhonePe announces milestone of 500 million registered users, processing over 8 billion transactions monthly. The Walmart-backed fintech continues to dominate India's UPI ecosystem.",
        )
        .with_category("Payments"),
        NewsItem::new(
            "RBI Introduces New Digital Lending Rules",
            "Reserve Bank of India unveils stricter guidelines for digital lending platforms. New regulations focus on fair practices and borrower protection in the growing fintech lending space.",
        )
        .with_category("Regulation"),
        NewsItem::new(
            "Paytm Bank Launches Savings Plus",
            "Paytm Payments Bank introduces high-yield savings account with 6% interest rate. The neo-bank targets young professionals with digital-first banking features.",
        )
        .with_category("Digital Banking"),
        NewsItem::new(
            "Razorpay Expands to Southeast Asia",
            "Razorpay announces international expansion with launch in Malaysia and Singapore. The payment gateway aims to capture $2 billion Southeast Asian market opportunity.",
        )
        .with_category("Payments"),
        NewsItem::new(
            "HDFC Bank Partners with Fintech Startups",
            "HDFC Bank launches fintech accelerator program investing ₹100 crores in emerging startups. Focus areas include AI-driven lending and blockchain-based solutions.",
        )
        .with_category("Innovation"),
    ]
}

/// Social post used when the model cannot write one.
pub const FALLBACK_POST: &str = "🚀 India Fintech Flash ⚡ - Your Daily Dose of Fintech Innovation!

Another exciting day in India's fintech ecosystem! Here are today's top 5 developments that are reshaping how we bank, pay, and invest:

💳 From payment unicorns hitting new milestones to regulatory updates shaping the future
🏦 Digital banking innovations making financial services more accessible
📊 Investment in fintech reaching new heights across the country

India continues to lead the global fintech revolution with over 500M+ digital payment users and counting!

What's your take on these developments? Which news caught your attention the most?

#IndiaFintech #DigitalPayments #Fintech #Innovation #Banking #UPI #DigitalIndia #FintechFlash

---
📌 Follow for daily fintech updates
🔔 Turn on notifications to never miss the flash!";
