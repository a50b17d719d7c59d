//! Shared text shown to users.
//!
//! Keep all user-facing strings in this module so they stay in one place and are
//! easy to update.

pub const HELP_TEXT: &str = "I post a daily set of five Indian fintech news flash cards.\n\n\
             <b>Commands:</b>\n\
             /flash - Generate today's flash cards.\n\
             /post - Show the social post for the last edition.\n\
             /export - Send the last edition as JSON and text files.\n\
             /info - Show system information.";

pub const GENERATING: &str = "🔄 Fetching latest fintech news...";
pub const NO_EDITION_YET: &str = "No flash cards yet. Send /flash to generate today's edition.";

pub const UPSTREAM_FALLBACK_NOTICE: &str =
    "⚠️ Could not reach the news generator. Showing default content.";

pub fn insufficient_items_notice(found: usize, required: usize) -> String {
    format!(
        "⚠️ Could not generate enough news items ({found} of {required}). Showing default content."
    )
}

pub const TITLE_PREFIX: &str = "India Fintech Flash ⚡";

pub fn cards_header(long_date: &str, count: usize) -> String {
    format!("📅 {long_date} - Top {count} Fintech Updates")
}

pub const POST_HEADER: &str = "📱 Ready-to-Post LinkedIn Content";
