//! Ordered parsing strategies and the fallback decision.
//!
//! A reply is run through a [`StrategyChain`]. The first strategy yielding at
//! least the configured minimum of items wins. If none does, or the upstream
//! call failed outright, the fixed [`fallback_items`] set is used so callers
//! always have five presentable items.

use std::fmt;

use tracing::{debug, warn};

use super::{fallback_items, parse_json, parse_labeled, parse_paragraphs, NewsItem, ResponseFormat, MAX_ITEMS};
use crate::ai::error::UpstreamError;
use crate::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    Labeled,
    Json,
    Paragraphs,
}

impl ParseStrategy {
    pub fn parse(self, text: &str) -> Vec<NewsItem> {
        match self {
            ParseStrategy::Labeled => parse_labeled(text),
            ParseStrategy::Json => parse_json(text),
            ParseStrategy::Paragraphs => parse_paragraphs(text),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ParseStrategy::Labeled => "labeled",
            ParseStrategy::Json => "json",
            ParseStrategy::Paragraphs => "paragraphs",
        }
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyChain {
    strategies: Vec<ParseStrategy>,
}

impl StrategyChain {
    pub fn new(strategies: Vec<ParseStrategy>) -> Self {
        Self { strategies }
    }

    /// Labeled replies fall back to paragraph splitting. JSON replies are
    /// never run through the label heuristics.
    pub fn for_format(format: ResponseFormat) -> Self {
        match format {
            ResponseFormat::Labeled => {
                Self::new(vec![ParseStrategy::Labeled, ParseStrategy::Paragraphs])
            }
            ResponseFormat::Json => Self::new(vec![ParseStrategy::Json]),
        }
    }

    pub fn strategies(&self) -> &[ParseStrategy] {
        &self.strategies
    }

    /// Run strategies in order until one reaches `min_items`.
    ///
    /// On failure returns the largest item count any strategy produced.
    pub fn run(&self, text: &str, min_items: usize) -> Result<(ParseStrategy, Vec<NewsItem>), usize> {
        let mut best = 0;
        for &strategy in &self.strategies {
            let items = strategy.parse(text);
            debug!(%strategy, count = items.len(), min_items, "Strategy result");
            if items.len() >= min_items {
                return Ok((strategy, items));
            }
            best = best.max(items.len());
        }
        Err(best)
    }
}

/// Why the fixed default set replaced generated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    UpstreamUnavailable(String),
    InsufficientItems { found: usize, required: usize },
}

impl FallbackReason {
    /// Soft warning shown next to the default content.
    pub fn notice(&self) -> String {
        match self {
            FallbackReason::UpstreamUnavailable(_) => messages::UPSTREAM_FALLBACK_NOTICE.to_string(),
            FallbackReason::InsufficientItems { found, required } => {
                messages::insufficient_items_notice(*found, *required)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOrigin {
    Parsed(ParseStrategy),
    Fallback(FallbackReason),
}

impl ItemOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ItemOrigin::Fallback(_))
    }

    /// Soft warning shown next to default content, `None` for parsed items.
    pub fn notice(&self) -> Option<String> {
        match self {
            ItemOrigin::Fallback(reason) => Some(reason.notice()),
            ItemOrigin::Parsed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub items: Vec<NewsItem>,
    pub origin: ItemOrigin,
}

impl Selection {
    pub fn fallback(reason: FallbackReason) -> Self {
        Self {
            items: fallback_items(),
            origin: ItemOrigin::Fallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin.is_fallback()
    }

    pub fn notice(&self) -> Option<String> {
        self.origin.notice()
    }
}

/// Keep the usability threshold within `1..=MAX_ITEMS`.
///
/// Zero would accept an empty reply, so it is raised to one.
pub fn clamp_min_items(min_items: usize) -> usize {
    min_items.clamp(1, MAX_ITEMS)
}

/// Pick the items to present for one generation request.
///
/// Upstream failures and replies that parse to fewer than `min_items` both
/// resolve to the fallback set.
pub fn select_items(
    upstream: Result<String, UpstreamError>,
    chain: &StrategyChain,
    min_items: usize,
) -> Selection {
    let required = clamp_min_items(min_items);
    let text = match upstream {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "Upstream unavailable, using default content");
            return Selection::fallback(FallbackReason::UpstreamUnavailable(err.to_string()));
        }
    };

    match chain.run(&text, required) {
        Ok((strategy, items)) => {
            debug!(%strategy, count = items.len(), "Selected parsed items");
            Selection {
                items,
                origin: ItemOrigin::Parsed(strategy),
            }
        }
        Err(found) => {
            warn!(found, required, "Too few items parsed, using default content");
            Selection::fallback(FallbackReason::InsufficientItems { found, required })
        }
    }
}
