//! Comment extraction from rendered pages
//!
//! Every configured matcher is applied to the whole document in order and the
//! matches are concatenated. Text is trimmed, short fragments are dropped, and the
//! result is deduplicated and bounded. Deduplication is by exact text only: when
//! matched elements nest and their text differs beyond surrounding whitespace, the
//! same logical comment can appear twice.

mod comments;
mod matchers;

pub use comments::CommentSet;
pub use matchers::{default_matchers, CompiledMatcher, MatcherConfig};

use crate::config::ExtractionConfig;
use crate::error::{Result, SentimentError};
use crate::page::PageSource;
use scraper::Html;

/// Default minimum length; comments must be strictly longer.
///
/// Also the lowest accepted minimum. Length counts Unicode scalar values, so text made
/// of characters outside the Basic Multilingual Plane (emoji) counts once per character
/// rather than twice as a UTF-16 code unit count would.
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Default maximum number of comments per set, and the highest accepted cap
pub const DEFAULT_MAX_COMMENTS: usize = 200;

/// Extracts a `CommentSet` from a page using an ordered list of matchers
#[derive(Debug, Clone)]
pub struct Extractor {
    matchers: Vec<CompiledMatcher>,
    min_length: usize,
    max_comments: usize,
}

impl Extractor {
    /// Compile the given matchers.
    ///
    /// Bounds may only be tightened: `min_length` below 5 or a cap outside `1..=200`
    /// is rejected.
    pub fn new(matchers: &[MatcherConfig], min_length: usize, max_comments: usize) -> Result<Self> {
        check_bounds(min_length, max_comments)?;

        let matchers = matchers
            .iter()
            .map(CompiledMatcher::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            matchers,
            min_length,
            max_comments,
        })
    }

    /// Extractor with the default matchers and bounds
    pub fn with_defaults() -> Result<Self> {
        Self::new(&default_matchers(), DEFAULT_MIN_LENGTH, DEFAULT_MAX_COMMENTS)
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        Self::new(&config.matchers, config.min_length, config.max_comments)
    }

    /// Extract comments from a parsed document
    pub fn extract(&self, document: &Html) -> CommentSet {
        let mut candidates = Vec::new();

        for matcher in &self.matchers {
            let before = candidates.len();

            for element in document.select(&matcher.selector) {
                let text: String = element.text().collect();
                let text = text.trim();
                if text.chars().count() > self.min_length {
                    candidates.push(text.to_string());
                }
            }

            tracing::debug!(
                "Matcher {}: {} comments kept",
                matcher.name,
                candidates.len() - before
            );
        }

        let comments = CommentSet::collect_bounded(candidates, self.max_comments);
        tracing::debug!("{} comments after dedup", comments.len());
        comments
    }

    /// Parse markup and extract comments from it
    pub fn extract_html(&self, html: &str) -> CommentSet {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    /// Snapshot a page source and extract its comments
    pub fn extract_from(&self, source: &dyn PageSource) -> Result<CommentSet> {
        let html = source.snapshot()?;
        Ok(self.extract_html(&html))
    }

    pub fn matcher_names(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(|m| m.name.as_str())
    }

    pub fn max_comments(&self) -> usize {
        self.max_comments
    }
}

/// Reject bounds looser than the defaults
fn check_bounds(min_length: usize, max_comments: usize) -> Result<()> {
    if min_length < DEFAULT_MIN_LENGTH {
        return Err(SentimentError::InvalidConfigValue {
            path: "extraction.min_length".to_string(),
            message: format!(
                "Minimum length must be at least {}, got {}",
                DEFAULT_MIN_LENGTH, min_length
            ),
        });
    }

    if max_comments == 0 || max_comments > DEFAULT_MAX_COMMENTS {
        return Err(SentimentError::InvalidConfigValue {
            path: "extraction.max_comments".to_string(),
            message: format!(
                "Max comments must be between 1 and {}, got {}",
                DEFAULT_MAX_COMMENTS, max_comments
            ),
        });
    }

    Ok(())
}
