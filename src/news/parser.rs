//! Extraction of [`NewsItem`]s from free-form model replies.
//!
//! Three parsers are provided, each tolerant of a different reply layout:
//!
//! * [`parse_labeled`] walks `TITLE:` / `CONTENT:` labels line by line.
//! * [`parse_json`] reads a `{"news": [...]}` payload, optionally fenced.
//! * [`parse_paragraphs`] treats blank-line separated paragraphs as items.
//!
//! None of them fail. Malformed input produces a short or empty list and the
//! caller decides whether that is enough. Every result holds at most
//! [`MAX_ITEMS`] entries in source order.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};

use super::{NewsItem, MAX_ITEMS};
use crate::text_utils::{clean_title, collapse_whitespace, is_fence_line, strip_code_fence, strip_list_marker};

/// Matches a label marker, including markdown bold around it: `TITLE:`,
/// `**TITLE:**`, `**CONTENT**:`, `TITLE :`.
static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\*\*|__)?\b(TITLE|CONTENT)\b\s*(?:\*\*|__)?\s*:\s*(?:\*\*|__)?")
        .expect("label regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Title,
    Content,
}

#[derive(Default)]
struct LabelWalker {
    items: Vec<NewsItem>,
    title: String,
    content: String,
    content_open: bool,
    awaiting_title: bool,
}

impl LabelWalker {
    fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    fn commit(&mut self) {
        let title = std::mem::take(&mut self.title);
        let content = std::mem::take(&mut self.content);
        trace!(%title, "Committing labeled item");
        self.items.push(NewsItem::new(title, content));
    }

    fn on_title(&mut self, value: &str) {
        if self.is_complete() {
            self.commit();
        } else if !self.title.is_empty() {
            trace!(dropped = %self.title, "Title without content replaced");
        }
        self.title = clean_title(value);
        self.content.clear();
        self.content_open = false;
        self.awaiting_title = self.title.is_empty();
    }

    fn on_content(&mut self, value: &str) {
        if self.title.is_empty() {
            trace!("Content label before any title ignored");
            self.content_open = false;
            return;
        }
        self.awaiting_title = false;
        self.append(value);
        self.content_open = true;
    }

    fn on_plain(&mut self, line: &str) {
        if self.awaiting_title {
            let title = clean_title(line);
            if !title.is_empty() {
                self.title = title;
                self.awaiting_title = false;
            }
        } else if self.content_open {
            self.append(line);
        }
    }

    fn on_boundary(&mut self) {
        self.content_open = false;
    }

    fn append(&mut self, text: &str) {
        let text = collapse_whitespace(text);
        if text.is_empty() {
            return;
        }
        if !self.content.is_empty() {
            self.content.push(' ');
        }
        self.content.push_str(&text);
    }

    fn finish(mut self) -> Vec<NewsItem> {
        if self.is_complete() {
            self.commit();
        }
        self.items.truncate(MAX_ITEMS);
        self.items
    }
}

/// Parse `TITLE:` / `CONTENT:` labeled text.
///
/// Labels may sit anywhere in a line, so numbered (`1. TITLE: ...`), bulleted
/// and single-line (`TITLE: a CONTENT: b`) layouts all work. Plain lines extend
/// the open content block until a blank line, fence or the next label. A title
/// that never receives content is dropped.
pub fn parse_labeled(text: &str) -> Vec<NewsItem> {
    let mut walker = LabelWalker::default();

    for line in text.trim().lines() {
        let line = line.trim();
        if line.is_empty() || is_fence_line(line) {
            walker.on_boundary();
            continue;
        }

        let markers: Vec<(Label, usize, usize)> = LABEL_RE
            .captures_iter(line)
            .filter_map(|cap| {
                let whole = cap.get(0)?;
                let label = match cap.get(1)?.as_str() {
                    "TITLE" => Label::Title,
                    _ => Label::Content,
                };
                Some((label, whole.start(), whole.end()))
            })
            .collect();

        let Some(&(_, first_start, _)) = markers.first() else {
            walker.on_plain(line);
            continue;
        };

        let prefix = clean_title(&line[..first_start]);
        if !prefix.is_empty() {
            walker.on_plain(&prefix);
        }

        for (i, &(label, _, value_start)) in markers.iter().enumerate() {
            let value_end = markers
                .get(i + 1)
                .map(|&(_, start, _)| start)
                .unwrap_or(line.len());
            let value = &line[value_start..value_end];
            match label {
                Label::Title => walker.on_title(value),
                Label::Content => walker.on_content(value),
            }
        }
    }

    let items = walker.finish();
    debug!(count = items.len(), "Parsed labeled reply");
    items
}

fn string_field(entry: &Value, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .map(collapse_whitespace)
        .filter(|s| !s.is_empty())
}

fn parse_json_value(text: &str) -> Option<Value> {
    let body = strip_code_fence(text);
    if let Ok(value) = serde_json::from_str(body) {
        return Some(value);
    }
    // Tolerate chatter around the object.
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&body[start..=end]).ok()
}

/// Parse a JSON reply of the form `{"news": [{"title", "content", "category"}]}`.
///
/// The payload may be wrapped in a code fence with an optional language tag.
/// Entries missing `title` or `content` are skipped. Anything that does not
/// decode yields an empty list.
pub fn parse_json(text: &str) -> Vec<NewsItem> {
    let Some(value) = parse_json_value(text) else {
        debug!("Reply is not valid JSON");
        return Vec::new();
    };

    let entries = match &value {
        Value::Object(map) => map.get("news").and_then(Value::as_array),
        Value::Array(list) => Some(list),
        _ => None,
    };
    let Some(entries) = entries else {
        debug!("JSON reply has no news array");
        return Vec::new();
    };

    let items: Vec<NewsItem> = entries
        .iter()
        .filter_map(|entry| {
            let title = string_field(entry, "title")?;
            let content = string_field(entry, "content")?;
            Some(NewsItem {
                title,
                content,
                category: string_field(entry, "category"),
            })
        })
        .take(MAX_ITEMS)
        .collect();

    debug!(count = items.len(), "Parsed JSON reply");
    items
}

/// Split a single-line paragraph such as `**Title**: body` or `Title: body`.
fn split_inline(line: &str) -> Option<(String, String)> {
    let line = strip_list_marker(line);
    if let Some(rest) = line.strip_prefix("**") {
        let close = rest.find("**")?;
        let title = clean_title(&rest[..close]);
        let body = rest[close + 2..].trim_start_matches([':', '-', '–', '—', ' ']);
        return Some((title, collapse_whitespace(body)));
    }
    for sep in [": ", " - ", " – ", " — "] {
        if let Some((title, body)) = line.split_once(sep) {
            return Some((clean_title(title), collapse_whitespace(body)));
        }
    }
    None
}

fn paragraph_item(lines: &[&str], first_paragraph: bool) -> Option<NewsItem> {
    let mut lines = lines;
    // A lead-in like "Here are today's updates:" glued to the first item. Only
    // the opening paragraph can carry one, and it needs a full item below it;
    // elsewhere a trailing colon belongs to the headline.
    if first_paragraph && lines.len() > 2 && lines[0].ends_with(':') {
        lines = &lines[1..];
    }

    let (title, content) = match lines {
        [] => return None,
        [single] => split_inline(single)?,
        [first, rest @ ..] => (
            clean_title(first.trim_end_matches(':')),
            collapse_whitespace(&rest.join(" ")),
        ),
    };

    let item = NewsItem::new(title, content);
    item.is_complete().then_some(item)
}

/// Treat each blank-line separated paragraph as one item.
///
/// The first line is the headline and the remaining lines are the body. A
/// paragraph of a single line is accepted when it carries an inline separator.
/// Label markers, if any, are removed before splitting.
pub fn parse_paragraphs(text: &str) -> Vec<NewsItem> {
    let cleaned = LABEL_RE.replace_all(text.trim(), "");
    let mut items = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut seen = 0;

    fn flush(paragraph: &mut Vec<&str>, items: &mut Vec<NewsItem>, seen: &mut usize) {
        if paragraph.is_empty() {
            return;
        }
        if let Some(item) = paragraph_item(paragraph, *seen == 0) {
            items.push(item);
        }
        *seen += 1;
        paragraph.clear();
    }

    for line in cleaned.lines() {
        let line = line.trim();
        if line.is_empty() || is_fence_line(line) {
            flush(&mut paragraph, &mut items, &mut seen);
        } else {
            paragraph.push(line);
        }
    }
    flush(&mut paragraph, &mut items, &mut seen);

    items.truncate(MAX_ITEMS);
    debug!(count = items.len(), "Parsed paragraph reply");
    items
}
