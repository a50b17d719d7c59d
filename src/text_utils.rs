use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

const BULLETS: [char; 7] = ['-', '*', '•', '·', '–', '#', '>'];

/// Strip leading list decoration from a line.
///
/// Removes enumeration markers (`1.`, `2)`), bullets (`- `, `* `, `• `) and
/// markdown headings (`### `). A bullet character glued to a word, as in
/// `#1` or `-5%`, is text and stays. Returns the remainder, which may be empty.
pub fn strip_list_marker(line: &str) -> &str {
    let mut rest = line.trim();
    loop {
        let before = rest;
        if let Some(first) = rest.chars().next().filter(|c| BULLETS.contains(c)) {
            let after = rest.trim_start_matches(first);
            if after.is_empty() || after.starts_with(char::is_whitespace) {
                rest = after.trim_start();
            }
        }
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits > 0 {
            let after = &rest[digits..];
            // `3.5%` is a number, `3. ` is an enumeration.
            if let Some(stripped) = after
                .strip_prefix('.')
                .or_else(|| after.strip_prefix(')'))
                .filter(|s| s.is_empty() || s.starts_with(char::is_whitespace))
            {
                rest = stripped.trim_start();
            }
        }
        if rest == before {
            return rest;
        }
    }
}

/// Remove markdown bold wrapping a fragment, e.g. `**Title**` or `__Title__`.
///
/// A wrapper is removed when present on both ends, or when a single `**` sits
/// at one end with no partner anywhere in the text. Quotes, backticks and
/// single underscores are left alone.
pub fn strip_emphasis(text: &str) -> &str {
    let mut rest = text.trim();
    for wrap in ["**", "__"] {
        loop {
            let inner = rest
                .strip_prefix(wrap)
                .and_then(|r| r.strip_suffix(wrap))
                .filter(|_| rest.len() >= 2 * wrap.len());
            match inner {
                Some(inner) => rest = inner.trim(),
                None => break,
            }
        }
        if rest.matches(wrap).count() == 1 {
            if let Some(r) = rest.strip_prefix(wrap).or_else(|| rest.strip_suffix(wrap)) {
                rest = r.trim();
            }
        }
    }
    rest
}

/// Clean a candidate headline: list decoration and bold removed, whitespace
/// collapsed. Handles both `1. **Title**` and `**1. Title**`. Other
/// punctuation passes through unchanged.
pub fn clean_title(text: &str) -> String {
    let inner = strip_emphasis(strip_list_marker(text));
    let cleaned = collapse_whitespace(strip_emphasis(strip_list_marker(inner)));
    trace!(?text, ?cleaned, "Cleaned title");
    cleaned
}

/// Collapse all runs of whitespace into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True for a markdown code-fence line such as "```" or "```json".
pub fn is_fence_line(line: &str) -> bool {
    let line = line.trim();
    line.strip_prefix("```")
        .is_some_and(|tag| tag.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Remove an optional fence wrapping the whole payload.
///
/// Handles "```json\n{...}\n```", "```\n{...}\n```" and inline fences like
/// "```json{...}```". Text without a leading fence is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let tag_len = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()).len();
    let body = &rest[tag_len..];
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}

/// Truncate to at most `max` grapheme clusters, appending `…` when cut.
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    let mut out: String = graphemes[..max.saturating_sub(1)].concat();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_list_marker_variants() {
        assert_eq!(strip_list_marker("1. TITLE: A"), "TITLE: A");
        assert_eq!(strip_list_marker("  2) Foo"), "Foo");
        assert_eq!(strip_list_marker("- • Bar"), "Bar");
        assert_eq!(strip_list_marker("* Baz"), "Baz");
        assert_eq!(strip_list_marker("### 3. Heading"), "Heading");
        assert_eq!(strip_list_marker("**Bold**"), "**Bold**");
    }

    #[test]
    fn strip_list_marker_keeps_numbers_in_text() {
        assert_eq!(strip_list_marker("500M users"), "500M users");
        assert_eq!(strip_list_marker("₹100 crore fund"), "₹100 crore fund");
        assert_eq!(strip_list_marker("3.5% growth"), "3.5% growth");
        assert_eq!(strip_list_marker("2025: year of UPI"), "2025: year of UPI");
        assert_eq!(strip_list_marker("#1 app"), "#1 app");
        assert_eq!(strip_list_marker("-5% slump"), "-5% slump");
        assert_eq!(strip_list_marker(">Quote"), ">Quote");
    }

    #[test]
    fn clean_title_removes_bold() {
        assert_eq!(clean_title("1. **PhonePe Crosses 500M**"), "PhonePe Crosses 500M");
        assert_eq!(clean_title("**2. RBI  norms**"), "RBI norms");
        assert_eq!(clean_title("**1.**"), "");
        assert_eq!(clean_title("__Neobank funding__"), "Neobank funding");
        assert_eq!(clean_title("UPI hits record**"), "UPI hits record");
    }

    #[test]
    fn clean_title_keeps_punctuation() {
        assert_eq!(
            clean_title("RBI calls UPI growth \"historic\""),
            "RBI calls UPI growth \"historic\""
        );
        assert_eq!(clean_title("\"Digital rupee\" pilot expands"), "\"Digital rupee\" pilot expands");
        assert_eq!(clean_title("#1 UPI app PhonePe"), "#1 UPI app PhonePe");
        assert_eq!(clean_title("-5% slump in crypto volumes"), "-5% slump in crypto volumes");
        assert_eq!(clean_title("`pay_later` rules"), "`pay_later` rules");
        assert_eq!(clean_title("- 'Kisan' loans grow"), "'Kisan' loans grow");
    }

    #[test]
    fn fence_detection() {
        assert!(is_fence_line("```"));
        assert!(is_fence_line("  ```json "));
        assert!(!is_fence_line("``` not a fence"));
        assert!(!is_fence_line("TITLE: x"));
    }

    #[test]
    fn strip_code_fence_variants() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("  {}  "), "{}");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_graphemes("UPI", 10), "UPI");
        assert_eq!(truncate_graphemes("🇮🇳🇮🇳🇮🇳", 2), "🇮🇳…");
    }
}
