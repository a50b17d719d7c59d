use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::flash::FlashEdition;
use crate::messages::TITLE_PREFIX;
use crate::news::NewsItem;

/// Structured export record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashExport {
    /// `YYYY-MM-DD`
    pub date: String,
    pub news: Vec<NewsItem>,
    pub linkedin_post: String,
}

impl From<&FlashEdition> for FlashExport {
    fn from(edition: &FlashEdition) -> Self {
        Self {
            date: edition.date.format("%Y-%m-%d").to_string(),
            news: edition.items.clone(),
            linkedin_post: edition.post.clone(),
        }
    }
}

pub fn to_json(edition: &FlashEdition) -> Result<String> {
    Ok(serde_json::to_string_pretty(&FlashExport::from(edition))?)
}

pub fn to_text(edition: &FlashEdition) -> String {
    let rule = "=".repeat(50);
    let mut text = format!(
        "{TITLE_PREFIX} - {}\n\nTOP {} FINTECH NEWS:\n{rule}\n\n",
        edition.long_date(),
        edition.items.len()
    );
    for (i, item) in edition.items.iter().enumerate() {
        let _ = writeln!(text, "{}. {}\n   {}", i + 1, item.title, item.content);
        if let Some(category) = &item.category {
            let _ = writeln!(text, "   Category: {category}");
        }
        text.push('\n');
    }
    let _ = write!(text, "\nLINKEDIN POST:\n{rule}\n{}\n", edition.post);
    text
}

/// `fintech_flash_20261016`
pub fn file_stem(date: NaiveDate) -> String {
    format!("fintech_flash_{}", date.format("%Y%m%d"))
}

/// Write the JSON and text exports into `dir`, returning both paths.
pub fn write_exports(edition: &FlashEdition, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let stem = file_stem(edition.date);

    let json_path = dir.join(format!("{stem}.json"));
    fs::write(&json_path, to_json(edition)?)
        .with_context(|| format!("writing {}", json_path.display()))?;

    let text_path = dir.join(format!("{stem}.txt"));
    fs::write(&text_path, to_text(edition))
        .with_context(|| format!("writing {}", text_path.display()))?;

    info!(json = %json_path.display(), text = %text_path.display(), "Exports written");
    Ok((json_path, text_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::{ItemOrigin, ParseStrategy};

    fn edition() -> FlashEdition {
        FlashEdition {
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            items: vec![
                NewsItem::new("A", "one").with_category("Payments"),
                NewsItem::new("B", "two"),
            ],
            origin: ItemOrigin::Parsed(ParseStrategy::Labeled),
            post: "post body".to_string(),
        }
    }

    #[test]
    fn json_record_fields() {
        let value: serde_json::Value = serde_json::from_str(&to_json(&edition()).unwrap()).unwrap();
        assert_eq!(value["date"], "2026-10-16");
        assert_eq!(value["news"][0]["category"], "Payments");
        assert!(value["news"][1].get("category").is_none());
        assert_eq!(value["linkedin_post"], "post body");
    }

    #[test]
    fn text_rendering() {
        let rule = "=".repeat(50);
        let expected = format!(
            "India Fintech Flash ⚡ - October 16, 2026\n\nTOP 2 FINTECH NEWS:\n{rule}\n\n\
             1. A\n   one\n   Category: Payments\n\n\
             2. B\n   two\n\n\
             \nLINKEDIN POST:\n{rule}\npost body\n"
        );
        assert_eq!(to_text(&edition()), expected);
    }

    #[test]
    fn stem_uses_compact_date() {
        assert_eq!(file_stem(edition().date), "fintech_flash_20261016");
    }
}
